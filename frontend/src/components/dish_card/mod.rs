use common::model::dish::Dish;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::ordering::helpers::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct DishCardProps {
    pub dish: Dish,
    /// Receives the dish id when "Preview" is clicked.
    pub on_preview: Callback<String>,
    /// Receives the dish id when "Add to Cart" is clicked.
    pub on_add: Callback<String>,
}

/// Menu card with thumbnail, description, price and the two dish actions.
pub struct DishCard;

impl Component for DishCard {
    type Message = ();
    type Properties = DishCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DishCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let dish = &props.dish;

        let on_preview = {
            let id = dish.id.clone();
            props.on_preview.reform(move |_| id.clone())
        };
        let on_add = {
            let id = dish.id.clone();
            props.on_add.reform(move |_| id.clone())
        };

        html! {
            <div class="dish-card" style="border-radius:12px;background:#fff;box-shadow:0 10px 15px rgba(0,0,0,0.1);padding:1.25rem;display:flex;flex-direction:column;position:relative;">
                {
                    if let Some(image) = &dish.image {
                        html! {
                            <img
                                src={image.clone()}
                                alt={dish.name.clone()}
                                style="height:10rem;width:100%;object-fit:cover;border-radius:8px;margin-bottom:0.75rem;"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <h2 style="font-size:1.5rem;font-weight:700;margin:0;">{ dish.name.clone() }</h2>
                <p style="color:#374151;">{ dish.description.clone().unwrap_or_default() }</p>
                <span style="color:#15803d;font-weight:700;margin:0.5rem 0;">{ format_price(u64::from(dish.price)) }</span>
                <div style="display:flex;gap:0.5rem;margin-top:auto;">
                    <button
                        style="background:#2563eb;color:#fff;padding:0.25rem 0.75rem;border:none;border-radius:4px;cursor:pointer;"
                        onclick={on_preview}
                    >
                        { "Preview" }
                    </button>
                    <button
                        style="background:#ca8a04;color:#fff;padding:0.25rem 0.75rem;border:none;border-radius:4px;cursor:pointer;"
                        onclick={on_add}
                    >
                        { "Add to Cart" }
                    </button>
                </div>
            </div>
        }
    }
}
