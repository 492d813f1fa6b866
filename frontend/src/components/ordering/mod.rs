//! Ordering page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, dialogs and the
//! order API call.

use gloo_console::log;
use yew::prelude::*;

mod api;
mod dialogs;
pub mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderingProps;
pub use state::OrderingComponent;

impl Component for OrderingComponent {
    type Message = Msg;
    type Properties = OrderingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let component = OrderingComponent::new(&ctx.props().config);
        log!(format!(
            "Menu loaded with {} dishes; orders go to {}",
            component.catalog.len(),
            ctx.props().config.order_endpoint
        ));
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
