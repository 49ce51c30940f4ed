mod detect_gender;
mod health;

pub use detect_gender::{
    AUDIO_FIELD, ErrorResponse, INVALID_OUTPUT_MESSAGE, LAUNCH_FAILED_MESSAGE,
    MISSING_FILE_MESSAGE, TIMEOUT_MESSAGE, detect_gender_handler,
};
pub use health::health_handler;
