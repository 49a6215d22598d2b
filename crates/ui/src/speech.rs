use dioxus::document::eval;
use phonics_core::speech::Utterance;
use services::Speaker;

/// Speaks through the webview's `speechSynthesis`. Hosts without it stay silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpeech;

impl WebSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Speaker for WebSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance) {
        let _ = eval(&speak_script(utterance));
    }
}

pub(crate) fn speak_script(utterance: &Utterance) -> String {
    let text = serde_json::to_string(&utterance.text).unwrap_or_else(|_| "\"\"".into());
    format!(
        r"(function() {{
            if (!('speechSynthesis' in window)) return;
            const utterance = new SpeechSynthesisUtterance({text});
            utterance.rate = {rate};
            utterance.pitch = {pitch};
            window.speechSynthesis.speak(utterance);
        }})();",
        rate = utterance.rate,
        pitch = utterance.pitch,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_escapes_text_and_sets_voice() {
        let script = speak_script(&Utterance::new("say \"hi\"", 0.7, 1.2));
        assert!(script.contains(r#"new SpeechSynthesisUtterance("say \"hi\"")"#));
        assert!(script.contains("utterance.rate = 0.7;"));
        assert!(script.contains("utterance.pitch = 1.2;"));
        assert!(script.contains("'speechSynthesis' in window"));
    }
}
