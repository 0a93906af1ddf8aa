// File: src/view.rs
// Purpose: Maud markup for the contact form and its submitted display

use maud::{html, Markup};

use crate::field::Field;
use crate::form::ContactForm;
use crate::state::FormState;
use crate::validation::Validate;

/// Text shown by the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub title: String,
    pub submit_label: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            title: "Contact Form".to_string(),
            submit_label: "Submit".to_string(),
        }
    }
}

/// Render the whole component: header, inputs with errors, submit button,
/// and the submitted display once a submission succeeded
pub fn render<V: Validate>(form: &ContactForm<V>, options: &ViewOptions) -> Markup {
    let state = form.state();
    let errors = form.errors();

    html! {
        div.contact-form {
            h1 { (options.title) }
            form novalidate {
                @for field in Field::ALL {
                    div.field {
                        label for=(field.name()) {
                            (field.label())
                            @if field.is_required() { "*" }
                        }
                        @if field == Field::Message {
                            textarea id=(field.name()) name=(field.name()) { (state.get(field)) }
                        } @else {
                            input id=(field.name()) name=(field.name()) value=(state.get(field));
                        }
                        @if let Some(message) = errors.get(field) {
                            p data-testid="error" { "Error: " (message) }
                        }
                    }
                }
                button type="submit" { (options.submit_label) }
            }
            @if let Some(snapshot) = form.submitted() {
                (render_display(snapshot))
            }
        }
    }
}

/// Echo of the last submitted values
///
/// The message line is omitted when no message was submitted.
pub fn render_display(snapshot: &FormState) -> Markup {
    html! {
        div.display {
            h2 { "You Submitted:" }
            @for (field, value) in snapshot.iter() {
                @if field.is_required() || !value.is_empty() {
                    p data-testid=(field.display_test_id()) {
                        b { (field.label()) ": " }
                        (value)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted_form(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::FirstName, "Branden");
        form.set_field(Field::LastName, "Jones");
        form.set_field(Field::Email, "me@me.me");
        form.set_field(Field::Message, message);
        form.submit().unwrap();
        form
    }

    #[test]
    fn test_renders_header_and_labels() {
        let html = render(&ContactForm::new(), &ViewOptions::default()).into_string();

        assert!(html.contains("<h1>Contact Form</h1>"));
        assert!(html.contains(r#"<label for="firstName">First Name*</label>"#));
        assert!(html.contains(r#"<label for="message">Message</label>"#));
        assert!(html.contains(r#"<input id="email" name="email" value="">"#));
        assert!(html.contains(r#"<button type="submit">Submit</button>"#));
    }

    #[test]
    fn test_renders_live_errors() {
        let html = render(&ContactForm::new(), &ViewOptions::default()).into_string();

        assert_eq!(html.matches(r#"data-testid="error""#).count(), 3);
        assert!(html.contains("Error: firstName must have at least 5 characters"));
        assert!(html.contains("Error: lastName is a required field"));
        assert!(html.contains("Error: email must be a valid email address"));
        assert!(!html.contains("You Submitted:"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut form = ContactForm::new();
        form.set_field(Field::Message, "<script>");
        let html = render(&form, &ViewOptions::default()).into_string();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_display_after_submit() {
        let html = render(&submitted_form("you...i guess"), &ViewOptions::default()).into_string();

        assert!(html.contains("You Submitted:"));
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"data-testid="{}""#, field.display_test_id())));
        }
        assert!(html.contains("you...i guess"));
        assert!(!html.contains(r#"data-testid="error""#));
    }

    #[test]
    fn test_display_omits_empty_message() {
        let html = render_display(submitted_form("").submitted().unwrap()).into_string();

        assert!(html.contains(r#"data-testid="emailDisplay""#));
        assert!(!html.contains(r#"data-testid="messageDisplay""#));
    }

    #[test]
    fn test_custom_title() {
        let options = ViewOptions {
            title: "Get in touch".to_string(),
            submit_label: "Send".to_string(),
        };
        let html = render(&ContactForm::new(), &options).into_string();
        assert!(html.contains("<h1>Get in touch</h1>"));
        assert!(html.contains(">Send</button>"));
    }
}
