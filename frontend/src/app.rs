use crate::components::ordering::OrderingComponent;
use crate::config::AppConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: AppConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: AppConfig::from_build_env(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <OrderingComponent config={self.config.clone()} />
            </div>
        }
    }
}
