use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::Session;
use crate::services::dialogue::DialogueConfig;
use crate::services::generative::GenerativeProvider;
use crate::services::nlu::IntentClassifier;

pub struct AppState {
    pub config: AppConfig,
    pub dialogue: DialogueConfig,
    pub classifier: Box<dyn IntentClassifier>,
    pub generative: Box<dyn GenerativeProvider>,
    /// One slot record per conversation id, cleared only on cancellation or
    /// confirmed completion.
    pub sessions: Mutex<HashMap<String, Session>>,
}
