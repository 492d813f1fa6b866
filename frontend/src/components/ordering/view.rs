//! View rendering for the ordering page.
//!
//! Layout: restaurant header, the menu grid of dish cards, then the floating
//! cart panel (only while the cart has lines) and the two overlays (dish
//! preview and order confirmation).

use common::model::cart_line::CartLine;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::preview::preview_dialog;
use super::dialogs::success::success_dialog;
use super::helpers::{cart_heading, format_price};
use super::messages::Msg;
use super::state::OrderingComponent;
use crate::components::dish_card::DishCard;
use crate::menu_grid::MenuGrid;

const MENU_COLUMNS: usize = 3;

pub fn view(component: &OrderingComponent, ctx: &Context<OrderingComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div style="min-height:100vh;background:linear-gradient(to bottom right,#fefce8,#f0fdf4,#fff7ed);padding:2rem 1rem;font-family:sans-serif;">
            { build_header(&ctx.props().config.restaurant_name) }
            { build_menu(component, link) }
            { preview_dialog(component, link) }
            { build_cart_panel(component, link) }
            { success_dialog(component, link) }
        </div>
    }
}

fn build_header(restaurant_name: &str) -> Html {
    html! {
        <header style="margin-bottom:3rem;text-align:center;">
            <h1 style="font-size:3rem;font-weight:800;color:#15803d;letter-spacing:0.1em;margin-bottom:0.5rem;text-shadow:0 4px 6px rgba(0,0,0,0.1);">
                { restaurant_name.to_string() }
            </h1>
            <p style="font-size:1.125rem;color:#374151;">{ "Order your meal & preview it here!" }</p>
        </header>
    }
}

fn build_menu(component: &OrderingComponent, link: &Scope<OrderingComponent>) -> Html {
    let on_preview = link.callback(Msg::OpenPreview);
    let on_add = link.callback(Msg::AddToCart);

    html! {
        <MenuGrid columns={MENU_COLUMNS}>
            {
                for component.catalog.dishes().iter().map(|dish| html! {
                    <DishCard
                        key={dish.id.clone()}
                        dish={dish.clone()}
                        on_preview={on_preview.clone()}
                        on_add={on_add.clone()}
                    />
                })
            }
        </MenuGrid>
    }
}

/// Floating cart summary; hidden while the cart is empty.
fn build_cart_panel(component: &OrderingComponent, link: &Scope<OrderingComponent>) -> Html {
    if component.ledger.is_empty() {
        return html! {};
    }

    let placing = component.submitter.is_submitting();
    let button_style = format!(
        "background:#15803d;color:#fff;padding:0.5rem 1rem;border:none;border-radius:4px;margin-top:0.75rem;width:100%;font-weight:600;{}",
        if placing { "opacity:0.7;cursor:not-allowed;" } else { "cursor:pointer;" }
    );

    html! {
        <div style="position:fixed;bottom:1.5rem;right:1.5rem;background:#fff;border-radius:12px;box-shadow:0 25px 50px rgba(0,0,0,0.25);padding:1.25rem;width:20rem;z-index:40;">
            <h3 style="font-weight:700;font-size:1.25rem;margin:0 0 0.5rem 0;">{ cart_heading(component.ledger.item_count()) }</h3>
            { for component.ledger.lines().iter().map(|line| cart_row(line, link)) }
            <div style="font-weight:700;border-top:1px solid #e5e7eb;padding-top:0.5rem;margin-top:0.5rem;">
                { format!("Total: {}", format_price(component.ledger.compute_total())) }
            </div>
            <button
                style={button_style}
                onclick={link.callback(|_| Msg::PlaceOrder)}
                disabled={placing}
            >
                { if placing { "Placing Order..." } else { "Place Order" } }
            </button>
        </div>
    }
}

fn cart_row(line: &CartLine, link: &Scope<OrderingComponent>) -> Html {
    let dish_id = line.dish.id.clone();

    html! {
        <div key={line.dish.id.clone()} style="display:flex;justify-content:space-between;align-items:center;margin-bottom:0.5rem;">
            <span>{ format!("{} × {}", line.dish.name, line.qty) }</span>
            <span>{ format_price(line.subtotal()) }</span>
            <button
                style="color:#ef4444;font-weight:700;margin-left:0.5rem;background:none;border:none;cursor:pointer;"
                onclick={link.callback(move |_| Msg::RemoveFromCart(dish_id.clone()))}
            >
                { "×" }
            </button>
        </div>
    }
}
