use yew::html::Scope;
use yew::prelude::*;

use crate::components::ordering::{Msg, OrderingComponent};

/// "Order placed" confirmation, shown until the user presses OK.
pub fn success_dialog(component: &OrderingComponent, link: &Scope<OrderingComponent>) -> Html {
    if !component.submitter.success_visible() {
        return html! {};
    }

    html! {
        <div style="position:fixed;inset:0;z-index:50;display:flex;align-items:center;justify-content:center;background:rgba(0,0,0,0.4);">
            <div style="background:#fff;border-radius:12px;box-shadow:0 25px 50px rgba(0,0,0,0.25);padding:2rem;text-align:center;">
                <h2 style="font-size:1.5rem;font-weight:700;margin-bottom:0.5rem;color:#15803d;">{ "Order Placed!" }</h2>
                <p style="font-size:1.125rem;color:#374151;margin-bottom:1rem;">
                    { "Your order is on the way. Thank you!" }
                </p>
                <button
                    onclick={link.callback(|_| Msg::DismissSuccess)}
                    style="background:#16a34a;color:#fff;padding:0.5rem 1rem;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "OK" }
                </button>
            </div>
        </div>
    }
}
