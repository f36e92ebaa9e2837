use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid address {input:?}: {reason}")]
    Address { input: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Contract error: {0}")]
    Contract(
        #[from]
        ethers::contract::ContractError<ethers::providers::Provider<ethers::providers::Http>>,
    ),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::contract::ContractError;
    use ethers::providers::{Http, Provider};

    #[test]
    fn reverted_call_converts_into_contract_error() {
        let revert = ContractError::<Provider<Http>>::Revert(Default::default());
        let err: AppError = revert.into();
        assert!(matches!(err, AppError::Contract(_)));
        assert!(err.to_string().starts_with("Contract error"));
    }

    #[test]
    fn address_error_names_the_input() {
        let err = AppError::Address {
            input: "0xzz".into(),
            reason: "non-hex character".into(),
        };
        assert_eq!(err.to_string(), r#"Invalid address "0xzz": non-hex character"#);
    }
}
