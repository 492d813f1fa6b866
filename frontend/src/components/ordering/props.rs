//! Properties for the `OrderingComponent`.

use yew::prelude::*;

use crate::config::AppConfig;

/// Properties for the `OrderingComponent`.
///
/// The config is read once in `App` and handed down; the component keeps the
/// restaurant id inside its submitter and reads the endpoint on every submit.
#[derive(Properties, PartialEq, Clone)]
pub struct OrderingProps {
    pub config: AppConfig,
}
