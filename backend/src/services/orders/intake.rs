use crate::order_desk::state::{OrdersState, QueuedOrder};
use actix_web::{web, HttpResponse, Responder};
use common::model::order::Order;
use log::warn;
use tokio::sync::mpsc::error::TrySendError;

pub(crate) async fn process(payload: web::Json<Order>, state: web::Data<OrdersState>) -> impl Responder {
    match queue_order(payload.into_inner(), &state) {
        Ok(()) => HttpResponse::Ok().body("Order received"),
        Err(e) => {
            warn!("Order not queued: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Order not accepted: {}", e))
        }
    }
}

fn queue_order(order: Order, state: &OrdersState) -> Result<(), String> {
    state.tx.try_send(QueuedOrder::new(order)).map_err(|e| match e {
        TrySendError::Full(_) => "order desk is busy".to_string(),
        TrySendError::Closed(_) => "order desk is closed".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::order_desk::state::{OrdersState, QueuedOrder};
    use crate::services::orders::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::cart::CartLedger;
    use common::catalog::Catalog;
    use common::model::order::{Customer, Order};
    use common::order::OrderSubmitter;
    use tokio::sync::mpsc;

    const PATH: &str = "/api/external-order";

    fn sample_order() -> Order {
        let catalog = Catalog::builtin();
        let mut ledger = CartLedger::new();
        ledger.add_to_cart(catalog.get("paneer_butter_masala").unwrap());
        OrderSubmitter::new("bapu-ki-kutiya")
            .begin(&ledger, Customer::guest(), 1_700_000_000_000)
            .unwrap()
    }

    #[actix_web::test]
    async fn accepted_order_is_queued_for_the_desk() {
        let (tx, mut rx) = mpsc::channel::<QueuedOrder>(4);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrdersState { tx }))
                .service(configure_routes(PATH)),
        )
            .await;
        let order = sample_order();

        let req = test::TestRequest::post().uri(PATH).set_json(&order).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let queued = rx.try_recv().expect("order should be queued");
        assert_eq!(queued.order, order);
    }

    #[actix_web::test]
    async fn closed_desk_answers_service_unavailable() {
        let (tx, rx) = mpsc::channel::<QueuedOrder>(1);
        drop(rx);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrdersState { tx }))
                .service(configure_routes(PATH)),
        )
            .await;

        let req = test::TestRequest::post().uri(PATH).set_json(sample_order()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn full_desk_answers_service_unavailable() {
        let (tx, _rx) = mpsc::channel::<QueuedOrder>(1);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrdersState { tx }))
                .service(configure_routes(PATH)),
        )
            .await;

        let first = test::TestRequest::post().uri(PATH).set_json(sample_order()).to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let second = test::TestRequest::post().uri(PATH).set_json(sample_order()).to_request();
        assert_eq!(
            test::call_service(&app, second).await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected() {
        let (tx, mut rx) = mpsc::channel::<QueuedOrder>(1);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrdersState { tx }))
                .service(configure_routes(PATH)),
        )
            .await;

        let req = test::TestRequest::post()
            .uri(PATH)
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"items": "not a list"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(rx.try_recv().is_err());
    }
}
