pub mod batch;
pub mod classify;
pub mod config;
pub mod sanitize;

use eisenhower_core::{Classifier, Config, RefineClient};

/// Resolve the refinement opt-in: explicit flags win over the config file.
pub fn refine_enabled(config: &Config, refine: bool, no_refine: bool) -> bool {
    if no_refine {
        false
    } else if refine {
        true
    } else {
        config.refine.enabled
    }
}

pub fn classifier(config: &Config) -> Classifier {
    Classifier::with_refiner(RefineClient::new(config.refine_config()))
}

pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build()
}
