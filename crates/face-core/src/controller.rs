//! Login form glue: owns the face and reacts to form and pointer events.

use serde::{Deserialize, Serialize};

use crate::error::FaceResult;
use crate::expression::DEFAULT_EXPRESSION;
use crate::face::Face;
use crate::render::Canvas;
use crate::viewport::SurfaceHost;

/// Credentials and status texts for the login form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
    pub messages: LoginMessages,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginMessages {
    pub initial: String,
    pub username_focus: String,
    pub password_focus: String,
    pub success: String,
    pub failure: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: "mo".to_string(),
            password: "123456".to_string(),
            messages: LoginMessages::default(),
        }
    }
}

impl Default for LoginMessages {
    fn default() -> Self {
        Self {
            initial: "Please sign in".to_string(),
            username_focus: "Enter your username (mo)".to_string(),
            password_focus: "Enter your password (123456)".to_string(),
            success: "🎉 Signed in!".to_string(),
            failure: "❌ Wrong password! Try again".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageTone {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Explicit owner of a [`Face`] for a login form.
///
/// Event handlers hold (or borrow) the controller instead of reaching for a
/// global instance. While a transient expression is showing, focus changes and
/// pointer leaves leave it alone; the next pointer move clears it.
#[derive(Clone, Debug)]
pub struct LoginController {
    face: Face,
    login: LoginConfig,
    message: String,
    tone: MessageTone,
}

impl LoginController {
    /// Take ownership of `face`, center its features and show the initial prompt.
    pub fn new(mut face: Face, login: LoginConfig) -> Self {
        let [x, y] = face.anchor_global_position();
        face.update_position(x, y);
        Self {
            message: login.messages.initial.clone(),
            face,
            login,
            tone: MessageTone::Neutral,
        }
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    pub fn face_mut(&mut self) -> &mut Face {
        &mut self.face
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> MessageTone {
        self.tone
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.face.update_position(x, y);
    }

    /// Pointer left the page: look nervous and recenter.
    pub fn pointer_left(&mut self) {
        if self.face.is_transient() {
            return;
        }
        self.face.set_expression("nervous", false);
        let [x, y] = self.face.anchor_global_position();
        self.face.update_position(x, y);
    }

    pub fn input_focused(&mut self, field: Field) {
        if self.face.is_transient() {
            return;
        }
        let (expression, message) = match field {
            Field::Username => (DEFAULT_EXPRESSION, &self.login.messages.username_focus),
            Field::Password => ("shock", &self.login.messages.password_focus),
        };
        self.face.set_expression(expression, false);
        self.message = message.clone();
        self.tone = MessageTone::Neutral;
    }

    pub fn input_blurred(&mut self) {
        if self.face.is_transient() {
            return;
        }
        self.face.set_expression(DEFAULT_EXPRESSION, false);
        self.message = self.login.messages.initial.clone();
        self.tone = MessageTone::Neutral;
    }

    /// Check the credentials. A failure shows a transient sad face.
    pub fn submit(&mut self, username: &str, password: &str) -> bool {
        let ok = username == self.login.username && password == self.login.password;
        if ok {
            self.face.set_expression("happy", false);
            self.message = self.login.messages.success.clone();
            self.tone = MessageTone::Success;
        } else {
            self.face.set_expression("sad", true);
            self.message = self.login.messages.failure.clone();
            self.tone = MessageTone::Error;
        }
        log::info!("login attempt for '{username}': {}", if ok { "ok" } else { "rejected" });
        ok
    }

    /// Forward a resize/scroll notification.
    pub fn layout_changed(&mut self, host: &impl SurfaceHost) {
        self.face.refresh_anchor(host);
    }

    pub fn render(&self, canvas: &mut impl Canvas) -> FaceResult<()> {
        self.face.render(canvas)
    }
}

#[cfg(test)]
#[path = "../tests/unit/controller.rs"]
mod tests;
