use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::entities::{ProfessionRef, Role, UserState};

//
// ──────────────────────────────────────────────────────────
// Raw payload
// ──────────────────────────────────────────────────────────
//

/// Raw form input for creating or updating a user, before any rule ran.
///
/// Every field is optional so the rules can tell "absent" apart from
/// "blank". `twitter` goes one level further: the outer `Option` is
/// presence of the key, the inner one its value, because the contract
/// requires the key to be present while allowing a null value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profession_id: Option<String>,
    pub profession: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub twitter: Option<Option<String>>,
    pub role: Option<String>,
    pub state: Option<String>,
    pub skills: Option<Value>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Field → human-readable messages, in stable field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.keys().copied().collect();
        write!(f, "validation failed: {}", fields.join(", "))
    }
}

//
// ──────────────────────────────────────────────────────────
// Context & output
// ──────────────────────────────────────────────────────────
//

/// Facts the cross-record rules need from storage, gathered by the
/// calling service before validation runs. The database constraints
/// remain the source of truth under concurrency; these are pre-checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Email already used by a non-trashed user other than the one
    /// being updated.
    pub email_taken: bool,
    /// The submitted `profession_id` resolves to a non-trashed,
    /// selectable profession.
    pub profession_valid: bool,
    /// A non-trashed profession already carries the submitted title.
    pub profession_title_taken: bool,
    /// Ids of every skill that exists.
    pub known_skill_ids: HashSet<Uuid>,
}

/// Normalized payload, produced only when every rule passed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` on update means "keep the stored hash".
    pub password: Option<String>,
    pub role: Role,
    pub state: UserState,
    pub bio: String,
    pub twitter: Option<String>,
    pub profession: ProfessionRef,
    pub skill_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

//
// ──────────────────────────────────────────────────────────
// Messages (the admin UI is Spanish)
// ──────────────────────────────────────────────────────────
//

pub(crate) mod msg {
    pub const FIRST_NAME_REQUIRED: &str = "El campo nombre es obligatorio";
    pub const LAST_NAME_REQUIRED: &str = "El campo apellidos es obligatorio";
    pub const EMAIL_REQUIRED: &str = "El campo email es obligatorio";
    pub const EMAIL_INVALID: &str = "El campo email no es válido";
    pub const EMAIL_TAKEN: &str = "El email ya está registrado";
    pub const PASSWORD_REQUIRED: &str = "El campo contraseña es obligatorio";
    pub const BIO_REQUIRED: &str = "El campo bio es obligatorio";
    pub const STATE_REQUIRED: &str = "El campo estado es obligatorio";
    pub const STATE_INVALID: &str = "El campo estado no es válido";
    pub const ROLE_INVALID: &str = "El campo rol no es válido";
    pub const TWITTER_MISSING: &str = "El campo twitter debe estar presente";
    pub const TWITTER_NOT_URL: &str = "El campo twitter debe ser una URL válida";
    pub const PROFESSION_CHOICE_REQUIRED: &str = "Selecciona una profesión o escribe una nueva";
    pub const PROFESSION_CHOICE_AMBIGUOUS: &str =
        "Selecciona una profesión o escribe una nueva, no ambas";
    pub const PROFESSION_ID_INVALID: &str = "La profesión seleccionada no es válida";
    pub const PROFESSION_TITLE_TAKEN: &str = "La profesión indicada ya existe";
    pub const SKILLS_NOT_ARRAY: &str = "El campo habilidades no es válido";
    pub const SKILLS_UNKNOWN_ID: &str = "Alguna de las habilidades seleccionadas no es válida";
}

//
// ──────────────────────────────────────────────────────────
// Rules
// ──────────────────────────────────────────────────────────
//

pub fn validate(
    payload: &UserPayload,
    ctx: &ValidationContext,
    mode: ValidationMode,
) -> Result<ValidatedUser, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let first_name = required_text(
        payload.first_name.as_deref(),
        "first_name",
        msg::FIRST_NAME_REQUIRED,
        &mut errors,
    );
    let last_name = required_text(
        payload.last_name.as_deref(),
        "last_name",
        msg::LAST_NAME_REQUIRED,
        &mut errors,
    );

    let email = required_text(
        payload.email.as_deref(),
        "email",
        msg::EMAIL_REQUIRED,
        &mut errors,
    );
    if let Some(email) = &email {
        if !is_email(email) {
            errors.add("email", msg::EMAIL_INVALID);
        } else if ctx.email_taken {
            errors.add("email", msg::EMAIL_TAKEN);
        }
    }

    let password = match mode {
        ValidationMode::Create => required_text(
            payload.password.as_deref(),
            "password",
            msg::PASSWORD_REQUIRED,
            &mut errors,
        ),
        // Blank or absent means "leave the password unchanged"
        ValidationMode::Update => optional_text(payload.password.as_deref()),
    };

    let bio = required_text(payload.bio.as_deref(), "bio", msg::BIO_REQUIRED, &mut errors);

    let state = required_text(
        payload.state.as_deref(),
        "state",
        msg::STATE_REQUIRED,
        &mut errors,
    )
    .and_then(|raw| match UserState::parse(&raw) {
        Some(state) => Some(state),
        None => {
            errors.add("state", msg::STATE_INVALID);
            None
        }
    });

    let role = match optional_text(payload.role.as_deref()) {
        None => Some(Role::default()),
        Some(raw) => match Role::parse(&raw) {
            Some(role) => Some(role),
            None => {
                errors.add("role", msg::ROLE_INVALID);
                None
            }
        },
    };

    let twitter = validate_twitter(payload, &mut errors);
    let profession = validate_profession(payload, ctx, &mut errors);
    let skill_ids = validate_skills(payload.skills.as_ref(), &ctx.known_skill_ids, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    match (
        first_name, last_name, email, bio, state, role, twitter, profession,
    ) {
        (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(bio),
            Some(state),
            Some(role),
            Some(twitter),
            Some(profession),
        ) => Ok(ValidatedUser {
            first_name,
            last_name,
            email,
            password,
            role,
            state,
            bio,
            twitter,
            profession,
            skill_ids,
        }),
        _ => Err(errors),
    }
}

/// Presence and emptiness are different failures here: a missing key is
/// an error, a null/blank value stores NULL, a non-blank value must be
/// an http(s) URL.
fn validate_twitter(
    payload: &UserPayload,
    errors: &mut ValidationErrors,
) -> Option<Option<String>> {
    match &payload.twitter {
        None => {
            errors.add("twitter", msg::TWITTER_MISSING);
            None
        }
        Some(value) => match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            None => Some(None),
            Some(url) if is_url(url) => Some(Some(url.to_string())),
            Some(_) => {
                errors.add("twitter", msg::TWITTER_NOT_URL);
                None
            }
        },
    }
}

/// Exactly one of `profession_id` / `profession` must be non-empty.
/// Both empty flags both fields; both filled flags both fields; a typed
/// title colliding with an existing profession is rejected rather than
/// silently reused.
fn validate_profession(
    payload: &UserPayload,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<ProfessionRef> {
    let id_raw = optional_text(payload.profession_id.as_deref());
    let title = optional_text(payload.profession.as_deref());

    match (id_raw, title) {
        (None, None) => {
            errors.add("profession_id", msg::PROFESSION_CHOICE_REQUIRED);
            errors.add("profession", msg::PROFESSION_CHOICE_REQUIRED);
            None
        }
        (Some(_), Some(_)) => {
            errors.add("profession_id", msg::PROFESSION_CHOICE_AMBIGUOUS);
            errors.add("profession", msg::PROFESSION_CHOICE_AMBIGUOUS);
            None
        }
        (Some(raw), None) => match Uuid::from_str(&raw) {
            Ok(id) if ctx.profession_valid => Some(ProfessionRef::Existing(id)),
            _ => {
                errors.add("profession_id", msg::PROFESSION_ID_INVALID);
                None
            }
        },
        (None, Some(title)) => {
            if ctx.profession_title_taken {
                errors.add("profession", msg::PROFESSION_TITLE_TAKEN);
                None
            } else {
                Some(ProfessionRef::New(title))
            }
        }
    }
}

fn validate_skills(
    value: Option<&Value>,
    known_skill_ids: &HashSet<Uuid>,
    errors: &mut ValidationErrors,
) -> Vec<Uuid> {
    let Some(value) = value else {
        return Vec::new();
    };

    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => {
            let mut ids = Vec::new();
            for item in items {
                let parsed = item.as_str().and_then(|raw| Uuid::from_str(raw).ok());
                match parsed {
                    Some(id) if known_skill_ids.contains(&id) => {
                        if !ids.contains(&id) {
                            ids.push(id);
                        }
                    }
                    _ => {
                        errors.add("skills", msg::SKILLS_UNKNOWN_ID);
                        return Vec::new();
                    }
                }
            }
            ids
        }
        _ => {
            errors.add("skills", msg::SKILLS_NOT_ARRAY);
            Vec::new()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

fn required_text(
    value: Option<&str>,
    field: &'static str,
    message: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Some(v.to_string()),
        None => {
            errors.add(field, message);
            None
        }
    }
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn is_email(value: &str) -> bool {
    value.parse::<EmailAddress>().is_ok()
}

fn is_url(value: &str) -> bool {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE
        .get_or_init(|| Regex::new(r"^https?://\S+\.\S+$").expect("url pattern compiles"))
        .is_match(value)
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
