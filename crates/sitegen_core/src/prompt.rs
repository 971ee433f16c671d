/// Fixed instructions sent to every provider alongside the user message.
pub const SYSTEM_INSTRUCTIONS: &str = "You are a web development expert. Generate a simple website based on the user's prompt.
The website should:
1. Be self-contained in a single HTML file
2. Use HTML, CSS and basic JavaScript if needed
3. Include all styling inline in a <style> element and all scripting inline in a <script> element
4. Have a clean, modern design
5. Be valid HTML5 that works when opened directly in a browser
6. Literally contain <!DOCTYPE html>, <html, <head, <body and </html>
Return ONLY the HTML document, no explanations or markdown.";

/// A single request to generate a page. Lives for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn system_instructions(&self) -> &'static str {
        SYSTEM_INSTRUCTIONS
    }

    /// The user turn sent to the provider.
    pub fn user_message(&self) -> String {
        format!(
            "Create a simple website that displays '{}'. Return only the complete HTML code with inline CSS and JavaScript. The code must be valid HTML5 and work when opened directly in a browser.",
            self.prompt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn instructions_name_every_required_marker() {
        for marker in Marker::ALL {
            assert!(
                SYSTEM_INSTRUCTIONS.contains(marker.literal()),
                "missing {marker}"
            );
        }
        assert!(SYSTEM_INSTRUCTIONS.contains("no explanations or markdown"));
    }

    #[test]
    fn user_message_quotes_prompt() {
        let request = GenerationRequest::new("a clock");
        assert!(request
            .user_message()
            .starts_with("Create a simple website that displays 'a clock'."));
        assert_eq!(request.prompt(), "a clock");
    }
}
