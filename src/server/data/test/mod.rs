mod article;
mod charge_intent;
mod resident;
mod transaction;
