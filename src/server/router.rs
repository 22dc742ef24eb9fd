use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        charge_intent::{get_charge_intents, resolve_charge_intent},
        resident::{
            create_resident, delete_resident, get_resident, get_residents, update_resident,
        },
        transaction::{
            charge, delete_transaction, get_transaction, get_transactions, read_card,
            update_transaction,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/transaction", get(get_transactions))
        .route("/api/transaction/reader", get(read_card))
        .route("/api/transaction/charge/{username}", post(charge))
        .route(
            "/api/transaction/{id}",
            get(get_transaction)
                .patch(update_transaction)
                .delete(delete_transaction),
        )
        .route("/api/user", post(create_resident).get(get_residents))
        .route(
            "/api/user/{name}",
            get(get_resident)
                .patch(update_resident)
                .delete(delete_resident),
        )
        .route("/api/charge-intent", get(get_charge_intents))
        .route(
            "/api/charge-intent/{id}/resolve",
            post(resolve_charge_intent),
        )
}
