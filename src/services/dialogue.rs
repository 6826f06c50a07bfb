//! Slot-filling dialogue manager for the appointment flow.
//!
//! Pure except for the explicit `Session` mutation: given the classifier
//! output and the raw message, it merges newly extracted slot values, then
//! decides the next action (ask for the next missing slot, re-ask for
//! confirmation, finalize, cancel, or hand the turn to the generative
//! fallback).

use crate::models::{ClassifierResult, Session};

pub const ASK_FACILITY: &str = "Hangi hastane için randevu almak istiyorsunuz?";
pub const ASK_DEPARTMENT: &str = "Hangi bölüm için randevu almak istiyorsunuz?";
pub const ASK_DATETIME: &str = "Hangi tarih ve saat için randevu almak istiyorsunuz?";
pub const CANCELLED_REPLY: &str =
    "Randevu işleminiz iptal edildi. Başka bir konuda yardımcı olabilirim.";
pub const COMPLETED_REPLY: &str = "Randevunuz oluşturuldu. Sağlıklı günler dileriz!";

/// Keyword sets and entity-key alias chains for the appointment flow.
///
/// Keywords are ordered sets matched by case-insensitive containment. Alias
/// chains exist because the classifier has shipped the same semantic entity
/// under different keys across app versions and locales; a chain is tried in
/// order and the first non-empty value wins. All keywords are stored
/// lowercase.
#[derive(Debug, Clone)]
pub struct DialogueConfig {
    pub booking_intent: String,
    /// Strict lower bound: intent confidence must exceed this to enter the flow.
    pub intent_threshold: f64,
    /// Non-booking intents above this are named in the fallback hint.
    pub hint_threshold: f64,
    pub trigger_keywords: Vec<String>,
    pub cancel_keywords: Vec<String>,
    pub confirm_keywords: Vec<String>,
    pub facility_keys: Vec<String>,
    pub department_keys: Vec<String>,
    pub datetime_keys: Vec<String>,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            booking_intent: "randevu_al".to_string(),
            intent_threshold: 0.7,
            hint_threshold: 0.5,
            trigger_keywords: vec!["randevu".to_string()],
            cancel_keywords: vec!["iptal".to_string(), "vazgeç".to_string()],
            confirm_keywords: vec!["evet".to_string()],
            facility_keys: vec!["hastane".to_string(), "hastane:hastane".to_string()],
            department_keys: vec![
                "bolum".to_string(),
                "bolum:bolum".to_string(),
                "poliklinik".to_string(),
            ],
            datetime_keys: vec![
                "tarih".to_string(),
                "tarih:tarih".to_string(),
                "wit$datetime:datetime".to_string(),
            ],
        }
    }
}

/// What the caller should do with this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Final reply, produced by the appointment flow itself.
    Reply(String),
    /// Not an appointment turn: ask the generative fallback with this hint.
    Fallback { hint: String },
}

pub fn respond(
    config: &DialogueConfig,
    session: &mut Session,
    nlu: &ClassifierResult,
    message: &str,
) -> Action {
    merge_entities(config, session, nlu);

    let lowered = message.to_lowercase();

    if contains_any(&lowered, &config.cancel_keywords) {
        session.clear();
        return Action::Reply(CANCELLED_REPLY.to_string());
    }

    let booking_requested = contains_any(&lowered, &config.trigger_keywords)
        && nlu.top_intent() == Some(config.booking_intent.as_str())
        && nlu.top_confidence() > config.intent_threshold;

    if booking_requested || session.has_any() {
        return Action::Reply(next_flow_reply(config, session, &lowered));
    }

    Action::Fallback {
        hint: fallback_hint(config, nlu, message),
    }
}

/// Fill empty slots from the classifier entities. Populated slots are never
/// overwritten; partial state persists until cancellation or completion.
fn merge_entities(config: &DialogueConfig, session: &mut Session, nlu: &ClassifierResult) {
    if session.facility.is_none() {
        session.facility = nlu.entity_for(&config.facility_keys);
    }
    if session.department.is_none() {
        session.department = nlu.entity_for(&config.department_keys);
    }
    if session.datetime.is_none() {
        session.datetime = nlu.entity_for(&config.datetime_keys);
    }
}

/// The slot-filling ladder, fixed order, first missing slot wins. With all
/// slots filled, a non-affirmative message re-prompts with the identical
/// confirmation; an affirmative one finalizes and resets.
fn next_flow_reply(config: &DialogueConfig, session: &mut Session, lowered: &str) -> String {
    if session.facility.is_none() {
        return ASK_FACILITY.to_string();
    }
    if session.department.is_none() {
        return ASK_DEPARTMENT.to_string();
    }
    if session.datetime.is_none() {
        return ASK_DATETIME.to_string();
    }

    if contains_any(lowered, &config.confirm_keywords) {
        session.clear();
        return COMPLETED_REPLY.to_string();
    }

    confirmation_message(session)
}

pub fn confirmation_message(session: &Session) -> String {
    format!(
        "{} hastanesinde {} bölümü için {} tarihli randevunuzu onaylıyor musunuz? (evet / iptal)",
        session.facility.as_deref().unwrap_or(""),
        session.department.as_deref().unwrap_or(""),
        session.datetime.as_deref().unwrap_or(""),
    )
}

fn fallback_hint(config: &DialogueConfig, nlu: &ClassifierResult, message: &str) -> String {
    let intent_note = match nlu.intents.first() {
        Some(intent)
            if intent.name != config.booking_intent
                && intent.confidence > config.hint_threshold =>
        {
            format!("Kullanıcının olası niyeti: {}.", intent.name)
        }
        _ => "Belirgin bir niyet tespit edilemedi.".to_string(),
    };

    format!(
        "Bir hastane randevu asistanısın. Kullanıcı şunu yazdı: \"{message}\". {intent_note} \
         Kısa, nazik ve Türkçe bir yanıt ver."
    )
}

fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}
