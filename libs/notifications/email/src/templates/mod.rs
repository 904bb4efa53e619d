//! Email template management with Handlebars
//!
//! This module provides:
//! - `TemplateEngine`: Handlebars-based template rendering
//! - The default enquiry templates: the confirmation sent to the student
//!   and the lead alert sent to the staff inbox

use eyre::{eyre, Result};
use handlebars::Handlebars;
use serde_json::Value;
use std::collections::HashMap;

/// Template name for the student-facing enquiry confirmation
pub const TEMPLATE_ENQUIRY_CONFIRMATION: &str = "enquiry_confirmation";

/// Template name for the staff-facing new-lead alert
pub const TEMPLATE_LEAD_ALERT: &str = "lead_alert";

/// Rendered template result
#[derive(Debug, Clone)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body_html: String,
}

/// Email template definition
#[derive(Clone, Debug)]
pub struct EmailTemplate {
    pub name: String,
    pub subject: String,
    pub body_html: String,
}

/// Handlebars-based template engine
///
/// Supports:
/// - Variables: `{{name}}`
/// - Conditionals: `{{#if condition}}...{{/if}}`
/// - HTML escaping by default; `{{{unescaped}}}` for raw HTML
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    templates: HashMap<String, EmailTemplate>,
}

impl TemplateEngine {
    /// Create a new TemplateEngine with the default enquiry templates
    pub fn new() -> Result<Self> {
        let mut engine = Self {
            handlebars: Handlebars::new(),
            templates: HashMap::new(),
        };

        engine.register_defaults()?;

        Ok(engine)
    }

    /// Register a template
    pub fn register(&mut self, template: EmailTemplate) -> Result<()> {
        self.handlebars
            .register_template_string(&format!("{}_subject", template.name), &template.subject)
            .map_err(|e| eyre!("Invalid subject template '{}': {}", template.name, e))?;
        self.handlebars
            .register_template_string(&format!("{}_html", template.name), &template.body_html)
            .map_err(|e| eyre!("Invalid HTML template '{}': {}", template.name, e))?;

        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    /// Render a registered template with the given data
    pub fn render(&self, name: &str, data: &Value) -> Result<RenderedTemplate> {
        if !self.templates.contains_key(name) {
            return Err(eyre!("Unknown template: {}", name));
        }

        let subject = self
            .handlebars
            .render(&format!("{}_subject", name), data)
            .map_err(|e| eyre!("Failed to render subject for '{}': {}", name, e))?;
        let body_html = self
            .handlebars
            .render(&format!("{}_html", name), data)
            .map_err(|e| eyre!("Failed to render HTML for '{}': {}", name, e))?;

        Ok(RenderedTemplate { subject, body_html })
    }

    /// List registered template names
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn register_defaults(&mut self) -> Result<()> {
        self.register(EmailTemplate {
            name: TEMPLATE_ENQUIRY_CONFIRMATION.to_string(),
            subject: "DrivingMaster Enquiry Confirmation".to_string(),
            body_html: ENQUIRY_CONFIRMATION_HTML.to_string(),
        })?;
        self.register(EmailTemplate {
            name: TEMPLATE_LEAD_ALERT.to_string(),
            subject: "New DrivingMaster Lead".to_string(),
            body_html: LEAD_ALERT_HTML.to_string(),
        })?;
        Ok(())
    }
}

const ENQUIRY_CONFIRMATION_HTML: &str = r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 10px; background-color: #ffffff;">
  <div style="text-align: center; margin-bottom: 20px;">
    <h1 style="color: #333333; margin: 0;">Thank You!</h1>
    <p style="color: #666666; font-size: 16px;">We have received your enquiry.</p>
  </div>

  <div style="background-color: #f9f9f9; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
    <h3 style="color: #333333; margin-top: 0; border-bottom: 1px solid #dddddd; padding-bottom: 10px;">Enquiry Details</h3>
    <p style="margin: 5px 0;"><strong>Name:</strong> {{student_name}}</p>
    <p style="margin: 5px 0;"><strong>Phone:</strong> {{phone_number}}</p>
    <p style="margin: 5px 0;"><strong>Email:</strong> {{email}}</p>
    <p style="margin: 5px 0;"><strong>Car Type:</strong> {{car_type}}</p>
    <p style="margin: 5px 0;"><strong>Location:</strong> {{location}}</p>
    <p style="margin: 5px 0;"><strong>Start Date:</strong> {{start_date}}</p>
  </div>

  <div style="text-align: center; color: #888888; font-size: 14px;">
    <p>We will contact you soon to discuss your driving lessons.</p>
    <p style="margin-top: 20px;">&copy; {{year}} DrivingMaster. All rights reserved.</p>
  </div>
</div>
"#;

const LEAD_ALERT_HTML: &str = r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 10px; background-color: #ffffff;">
  <div style="background-color: #000000; color: #ffffff; padding: 15px; border-radius: 8px 8px 0 0; text-align: center;">
    <h2 style="margin: 0;">New Lead Received</h2>
  </div>

  <div style="padding: 20px;">
    <table style="width: 100%; border-collapse: collapse;">
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555; width: 40%;"><strong>Name:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">{{student_name}}</td>
      </tr>
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555;"><strong>Phone:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">
          <a href="tel:{{phone_number}}" style="color: #0066cc; text-decoration: none; font-weight: bold; font-size: 16px;">{{phone_number}}</a>
        </td>
      </tr>
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555;"><strong>Email:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">
          <a href="mailto:{{email}}" style="color: #0066cc; text-decoration: none;">{{email}}</a>
        </td>
      </tr>
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555;"><strong>Car Type:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">{{car_type}}</td>
      </tr>
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555;"><strong>Location:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">{{location}}</td>
      </tr>
      <tr>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #555555;"><strong>Start Date:</strong></td>
        <td style="padding: 10px; border-bottom: 1px solid #eeeeee; color: #333333;">{{start_date}}</td>
      </tr>
    </table>
  </div>

  <div style="text-align: center; margin-top: 20px; padding-top: 10px; border-top: 1px solid #eeeeee; color: #888888; font-size: 12px;">
    <p>This is an automated notification from the DrivingMaster website.</p>
  </div>
</div>
"#;
