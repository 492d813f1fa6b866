use common::model::dish::Media;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::ordering::helpers::format_price;
use crate::components::ordering::{Msg, OrderingComponent};

use super::video::PreviewVideo;

const OVERLAY_STYLE: &str = "position:fixed;inset:0;z-index:50;display:flex;align-items:center;justify-content:center;background:rgba(0,0,0,0.4);";

/// Modal showing the previewed dish, or nothing when no dish is open.
pub fn preview_dialog(component: &OrderingComponent, link: &Scope<OrderingComponent>) -> Html {
    let Some(dish) = component.preview.current() else {
        return html! {};
    };

    html! {
        <div style={OVERLAY_STYLE}>
            <div style="background:#fff;border-radius:12px;box-shadow:0 10px 15px rgba(0,0,0,0.2);padding:1.5rem;max-width:32rem;width:100%;position:relative;">
                <button
                    onclick={link.callback(|_| Msg::ClosePreview)}
                    style="position:absolute;top:0.75rem;right:0.75rem;font-size:1.25rem;font-weight:700;color:#ef4444;background:none;border:none;cursor:pointer;"
                >
                    { "×" }
                </button>

                { media_view(component.preview.media(), &dish.name) }

                <div style="margin-top:0.75rem;">
                    <h2 style="font-size:1.25rem;font-weight:600;margin:0;">{ dish.name.clone() }</h2>
                    <p style="color:#374151;">{ dish.description.clone().unwrap_or_default() }</p>
                </div>
                <div style="margin-top:0.5rem;">
                    <span style="color:#15803d;font-weight:700;">{ format_price(u64::from(dish.price)) }</span>
                </div>
            </div>
        </div>
    }
}

/// Looping muted video when the dish has one, otherwise the still image.
fn media_view(media: Option<Media<'_>>, name: &str) -> Html {
    match media {
        Some(Media::Video(src)) => html! {
            <PreviewVideo src={AttrValue::from(src.to_string())} />
        },
        Some(Media::Image(src)) => html! {
            <img
                src={src.to_string()}
                alt={name.to_string()}
                style="width:100%;height:18rem;object-fit:cover;border-radius:8px;"
            />
        },
        // Catalog::new rejects such dishes; render details only.
        None => html! {},
    }
}
