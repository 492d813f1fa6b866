//! Update function for the ordering page.
//!
//! Elm-style: takes the current `OrderingComponent`, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! The only asynchronous step is the order request. `PlaceOrder` spawns it
//! and the spawned task reports back with `OrderSettled`.

use common::model::order::Customer;
use common::order::Settlement;
use gloo_console::{error, log, warn};
use yew::prelude::*;

use super::api::post_order;
use super::helpers::{alert, now_millis, ORDER_FAILED_MESSAGE};
use super::messages::Msg;
use super::state::OrderingComponent;

pub fn update(
    component: &mut OrderingComponent,
    ctx: &Context<OrderingComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::OpenPreview(dish_id) => match component.catalog.get(&dish_id) {
            Some(dish) => {
                component.preview.open(dish.clone());
                true
            }
            None => {
                warn!(format!("Preview requested for unknown dish {dish_id}"));
                false
            }
        },
        Msg::ClosePreview => {
            component.preview.close();
            true
        }
        Msg::AddToCart(dish_id) => match component.catalog.get(&dish_id) {
            Some(dish) => {
                component.ledger.add_to_cart(dish);
                true
            }
            None => {
                warn!(format!("Add to cart requested for unknown dish {dish_id}"));
                false
            }
        },
        Msg::RemoveFromCart(dish_id) => component.ledger.remove_from_cart(&dish_id),
        Msg::PlaceOrder => {
            // Placeholder until the page collects customer details.
            let customer = Customer::guest();
            let Some(order) = component
                .submitter
                .begin(&component.ledger, customer, now_millis())
            else {
                return false;
            };

            let endpoint = ctx.props().config.order_endpoint.clone();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = post_order(&endpoint, &order).await;
                link.send_message(Msg::OrderSettled(outcome));
            });
            true
        }
        Msg::OrderSettled(outcome) => {
            match component.submitter.settle(&mut component.ledger, outcome) {
                Settlement::Placed => {
                    log!("Order placed");
                    true
                }
                Settlement::Failed(err) => {
                    error!(format!("Order failed: {err}"));
                    alert(ORDER_FAILED_MESSAGE);
                    true
                }
                Settlement::Ignored => false,
            }
        }
        Msg::DismissSuccess => {
            component.submitter.dismiss_success();
            true
        }
    }
}
