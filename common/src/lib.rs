//! AI Image Detector Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態機械・レスポンス解析

pub mod types;
pub mod layout;
pub mod error;
pub mod endpoint;
pub mod parser;
pub mod widget;

pub use types::{confidence_width, format_confidence, LabelTone, Prediction, SubmissionResult};
pub use layout::{next_gradient_angle, NavLayout};
pub use error::{Error, Result};
pub use endpoint::{Endpoint, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR, UPLOAD_FIELD};
pub use parser::{parse_prediction_response, UNEXPECTED_RESPONSE_MESSAGE, UNREACHABLE_MESSAGE};
pub use widget::{
    is_image_type, RequestState, SelectOutcome, Selection, SubmitBlocked, SubmitTicket,
    UploadWidget, BUSY_LABEL, SUBMIT_LABEL,
};
