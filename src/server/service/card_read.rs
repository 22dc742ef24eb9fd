//! Card-read flow: who is at the till and what can they spend.
//!
//! Runs one linear pass through
//! `Idle → AwaitingCardRead → ResolvingResident → FetchingBalance → Done`. There are no
//! retries; the first failing step ends the pass with that step's error.

use std::fmt;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::resident::ResidentRepository,
    error::{reader::ReaderError, AppError},
    ledger::CreditLedger,
    model::transaction::ResidentBalance,
    service::reader::CardReader,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardReadState {
    Idle,
    AwaitingCardRead,
    ResolvingResident,
    FetchingBalance,
    Done,
}

impl fmt::Display for CardReadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::AwaitingCardRead => "AwaitingCardRead",
            Self::ResolvingResident => "ResolvingResident",
            Self::FetchingBalance => "FetchingBalance",
            Self::Done => "Done",
        };
        f.write_str(name)
    }
}

pub struct CardReadService<'a> {
    db: &'a DatabaseConnection,
    reader: &'a CardReader,
    ledger: &'a dyn CreditLedger,
}

impl<'a> CardReadService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        reader: &'a CardReader,
        ledger: &'a dyn CreditLedger,
    ) -> Self {
        Self { db, reader, ledger }
    }

    /// Reads a card and returns the owner's name and ledger balance.
    ///
    /// # Returns
    /// - `Ok(ResidentBalance)` - Resident owning the card and their current balance
    /// - `Err(AppError::ReaderErr)` - Reader busy, timed out, unreachable, or the code is
    ///   not registered
    /// - `Err(AppError::LedgerUnreachable)` - The balance could not be fetched
    /// - `Err(AppError::DbErr)` - Directory lookup failed
    pub async fn read(&self) -> Result<ResidentBalance, AppError> {
        let mut state = CardReadState::Idle;

        advance(&mut state, CardReadState::AwaitingCardRead);
        let code = self.reader.read_code().await?;

        advance(&mut state, CardReadState::ResolvingResident);
        let resident = ResidentRepository::new(self.db)
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ReaderError::UnknownCode(code))?;

        advance(&mut state, CardReadState::FetchingBalance);
        let balance = self
            .ledger
            .balance(&resident.name)
            .await
            .map_err(AppError::LedgerUnreachable)?;

        advance(&mut state, CardReadState::Done);

        Ok(ResidentBalance {
            name: resident.name,
            balance,
        })
    }
}

fn advance(state: &mut CardReadState, next: CardReadState) {
    tracing::debug!("Card read: {} -> {}", state, next);
    *state = next;
}
