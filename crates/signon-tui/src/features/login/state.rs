/// Which credential field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Credential form state.
#[derive(Debug)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// Inline error banner (validation or server rejection).
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn new(email_prefill: Option<String>) -> Self {
        let email = email_prefill.unwrap_or_default();
        let focus = if email.is_empty() {
            LoginField::Email
        } else {
            LoginField::Password
        };
        Self {
            email,
            password: String::new(),
            focus,
            error: None,
        }
    }

    /// Submission is unavailable while either field is empty.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            LoginField::Email => self.email.pop(),
            LoginField::Password => self.password.pop(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_moves_focus_to_password() {
        let form = LoginFormState::new(Some("test@email.com".to_string()));
        assert_eq!(form.focus, LoginField::Password);

        let form = LoginFormState::new(None);
        assert_eq!(form.focus, LoginField::Email);
    }

    #[test]
    fn test_can_submit_requires_both_fields() {
        let mut form = LoginFormState::new(None);
        assert!(!form.can_submit());

        form.email = "test@email.com".to_string();
        assert!(!form.can_submit());

        form.password = "password123".to_string();
        assert!(form.can_submit());
    }
}
