//! Initial layout from the command line and `[startup]`.

use msb_config::schema::StartupConfig;
use msb_layout::SplitCount;

/// What the session looks like before the user touches anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupPlan {
    /// `None` opens the landing screen.
    pub split: Option<SplitCount>,
    /// Raw addresses, one per panel in order. Never longer than the split.
    pub urls: Vec<String>,
}

impl StartupPlan {
    /// Merge CLI options over the config.
    ///
    /// CLI addresses replace the configured list as a whole. Addresses
    /// without an explicit split pick the smallest split that fits them.
    pub fn resolve(cli_split: Option<u32>, cli_urls: &[String], config: &StartupConfig) -> Self {
        let urls: Vec<String> = if cli_urls.is_empty() {
            config.urls.clone()
        } else {
            cli_urls.to_vec()
        };
        let urls: Vec<String> = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        let requested = cli_split.or(config.split).or_else(|| {
            (!urls.is_empty()).then(|| (urls.len() as u32).clamp(2, 4))
        });

        let split = match requested.map(SplitCount::try_from) {
            Some(Ok(count)) => Some(count),
            Some(Err(e)) => {
                tracing::warn!("Ignoring startup split: {e}");
                None
            }
            None => None,
        };

        let Some(count) = split else {
            if !urls.is_empty() {
                tracing::warn!(
                    ignored = urls.len(),
                    "Startup addresses ignored without a split"
                );
            }
            return Self::default();
        };

        let mut urls = urls;
        if urls.len() > count.get() {
            tracing::warn!(
                panels = count.get(),
                ignored = urls.len() - count.get(),
                "More startup addresses than panels; extras ignored"
            );
            urls.truncate(count.get());
        }

        Self {
            split: Some(count),
            urls,
        }
    }
}
