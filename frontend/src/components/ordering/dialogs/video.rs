use web_sys::HtmlMediaElement;
use yew::{html, AttrValue, Component, Context, Html, NodeRef, Properties};

/// The few media element controls the preview needs.
pub trait Playback {
    fn set_muted(&self, muted: bool);
    fn set_looping(&self, looping: bool);
    fn start(&self);
}

impl Playback for HtmlMediaElement {
    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted);
    }

    fn set_looping(&self, looping: bool) {
        self.set_loop(looping);
    }

    fn start(&self) {
        // Autoplay refusals reject the promise; the clip then just shows its first frame.
        let _ = self.play();
    }
}

/// Mutes through the DOM property (the `muted` attribute only sets
/// `defaultMuted`, which autoplay policies ignore), then starts the loop.
pub fn start_silent_loop(media: &impl Playback) {
    media.set_muted(true);
    media.set_looping(true);
    media.start();
}

#[derive(Properties, PartialEq)]
pub struct PreviewVideoProps {
    pub src: AttrValue,
}

/// Looping, muted, control-less clip for the dish preview.
pub struct PreviewVideo {
    node_ref: NodeRef,
}

impl Component for PreviewVideo {
    type Message = ();
    type Properties = PreviewVideoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <video
                ref={self.node_ref.clone()}
                src={ctx.props().src.clone()}
                autoplay={true}
                loop={true}
                muted={true}
                playsinline={true}
                controls={false}
                style="width:100%;height:300px;background:#000;border-radius:12px;object-fit:cover;"
            />
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(video) = self.node_ref.cast::<HtmlMediaElement>() {
            start_silent_loop(&video);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingMedia {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Playback for RecordingMedia {
        fn set_muted(&self, muted: bool) {
            self.calls.borrow_mut().push(if muted { "muted" } else { "unmuted" });
        }

        fn set_looping(&self, looping: bool) {
            self.calls.borrow_mut().push(if looping { "loop" } else { "once" });
        }

        fn start(&self) {
            self.calls.borrow_mut().push("play");
        }
    }

    #[test]
    fn preview_is_muted_before_it_plays() {
        let media = RecordingMedia::default();

        start_silent_loop(&media);

        assert_eq!(*media.calls.borrow(), ["muted", "loop", "play"]);
    }
}
