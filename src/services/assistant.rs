use serde::Serialize;

/// Persona of the website assistant, sent as the first turn of every conversation.
pub const SYSTEM_PROMPT: &str = "\
Eres el asistente virtual del sitio web FullOps Group.
Ayudas a los usuarios a entender los servicios de la empresa.
Responde de forma clara, corta, profesional y amigable.
Si no sabes algo, dilo honestamente.
Sugiere secciones del sitio cuando sea relevante.
";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of the outbound chat-completions call.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// The system turn followed by the user's (already trimmed) message.
pub fn build_conversation(user_msg: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_msg)]
}

pub fn build_request(model: &str, max_tokens: u32, user_msg: &str) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        messages: build_conversation(user_msg),
        max_tokens,
    }
}
