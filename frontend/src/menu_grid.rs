use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MenuGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Responsive grid holding the dish cards.
pub struct MenuGrid;

impl Component for MenuGrid {
    type Message = ();
    type Properties = MenuGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MenuGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax(max(240px, calc((100% - {gaps}rem) / {columns})), 1fr));
             gap: 2.5rem;
             max-width: 64rem;
             margin: 0 auto 4rem auto;",
            gaps = 2.5 * props.columns.saturating_sub(1) as f64,
            columns = props.columns.max(1),
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
