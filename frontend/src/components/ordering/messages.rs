use common::order::SubmitError;

#[derive(Clone)]
pub enum Msg {
    OpenPreview(String),
    ClosePreview,
    AddToCart(String),
    RemoveFromCart(String),
    PlaceOrder,
    OrderSettled(Result<(), SubmitError>),
    DismissSuccess,
}
