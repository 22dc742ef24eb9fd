use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::transaction::{CreateChargeDto, TransactionDto, UpdateTransactionDto},
    server::{
        error::AppError,
        model::transaction::{ChargeParam, Transaction, UpdateTransactionParam},
        service::{
            card_read::CardReadService, charge::ChargeService, transaction::TransactionService,
        },
        state::AppState,
    },
};

/// GET /api/transaction/reader - Read a card and return its owner's balance
///
/// Asks the card reader for a card, resolves the code to a resident and fetches the
/// resident's SavaPage balance. The request stays open until a card is presented or the
/// read timeout elapses.
///
/// # Returns
/// - `200 OK`: `{name, balance}`
/// - `502 Bad Gateway`: Unknown card code, reader or ledger unreachable
/// - `503 Service Unavailable`: Another read held the reader too long
/// - `504 Gateway Timeout`: No card presented in time
pub async fn read_card(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let balance = CardReadService::new(&state.db, &state.card_reader, state.ledger.as_ref())
        .read()
        .await?;

    Ok((StatusCode::OK, Json(balance.into_dto())))
}

/// POST /api/transaction/charge/{username} - Charge a resident and record the sale
///
/// Debits `price` from the resident's SavaPage account. The transaction is recorded only
/// after the ledger confirmed the debit.
///
/// # Path Parameters
/// - `username`: SavaPage account name
///
/// # Returns
/// - `200 OK`: The recorded transaction
/// - `400 Bad Request`: Invalid price, line items or unknown articles
/// - `502 Bad Gateway`: The ledger did not confirm the debit; nothing was recorded
pub async fn charge(
    State(state): State<AppState>,
    username: Result<Path<String>, PathRejection>,
    payload: Result<Json<CreateChargeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(username) = username?;
    let Json(payload) = payload?;

    let transaction = ChargeService::new(&state.db, state.ledger.as_ref())
        .charge(ChargeParam::from_dto(username, payload))
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// GET /api/transaction - List recorded transactions, newest first
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let transactions: Vec<TransactionDto> = TransactionService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Transaction::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(transactions)))
}

/// GET /api/transaction/{id} - Get a transaction with its line items
///
/// # Returns
/// - `200 OK`: Transaction details
/// - `404 Not Found`: No transaction with that id
pub async fn get_transaction(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let transaction = TransactionService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// PATCH /api/transaction/{id} - Correct the date and/or price of a transaction
///
/// Does not touch the ledger.
///
/// # Returns
/// - `200 OK`: The corrected transaction
/// - `400 Bad Request`: Invalid payload or non-positive price
/// - `404 Not Found`: No transaction with that id
pub async fn update_transaction(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTransactionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let transaction = TransactionService::new(&state.db)
        .update(id, UpdateTransactionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// DELETE /api/transaction/{id} - Delete a transaction and its line items
///
/// # Returns
/// - `204 No Content`: Deleted
/// - `404 Not Found`: No transaction with that id
pub async fn delete_transaction(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    TransactionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
