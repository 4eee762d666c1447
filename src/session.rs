use crate::reorder::{DragItem, DropIndicator, DropPlacement, Gesture};
use crate::{Document, EditorConfig, EditorError, Id, Result, codec, statics};
use tracing::{debug, info, warn};

/// Destination for the generated JSON.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The single message shown to the user. Setting one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Editing state driven by the UI: raw input/output text, the current document, the
/// current notice, and the drag gesture in flight.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub config: EditorConfig,
    pub input_text: String,
    pub output_text: String,
    document: Document,
    notice: Option<Notice>,
    gesture: Gesture,
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        self.gesture.indicator()
    }

    /// Parse `input_text` and replace the document. On failure the document is emptied.
    pub fn load_input(&mut self) {
        match codec::decode_str(&self.input_text) {
            Ok(doc) => {
                info!(
                    targets = doc.len(),
                    styles = doc.targets().map(|t| t.styles.len()).sum::<usize>(),
                    "loaded input JSON"
                );
                self.document = doc;
                self.notice = Some(Notice::Success(statics::EN_OK_LOADED.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "failed to parse input JSON");
                self.document = Document::new();
                self.notice = Some(Notice::Error(format!(
                    "{} {e}",
                    statics::EN_ERR_PARSE_PREFIX
                )));
            }
        }
    }

    /// Encode the document into `output_text` and copy it. The output text is kept even
    /// when the clipboard write fails.
    pub fn generate_output(&mut self, clipboard: &mut dyn Clipboard) {
        self.output_text = codec::encode_pretty(&self.document);
        match clipboard.write_text(&self.output_text) {
            Ok(()) => {
                info!(bytes = self.output_text.len(), "generated output JSON");
                self.notice = Some(Notice::Success(statics::EN_OK_GENERATED.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.notice = Some(Notice::Error(format!(
                    "{} {e}",
                    statics::EN_ERR_GENERATE_PREFIX
                )));
            }
        }
    }

    fn replace(&mut self, op: &'static str, doc: Document) {
        if doc != self.document {
            debug!(op, targets = doc.len(), "document updated");
        }
        self.document = doc;
    }

    pub fn add_target(&mut self) {
        let doc = self
            .document
            .add_target_named(&self.config.default_target_name);
        self.replace("add_target", doc);
    }

    pub fn update_target_name(&mut self, target: Id, name: &str) {
        let doc = self.document.update_target_name(target, name);
        self.replace("update_target_name", doc);
    }

    pub fn delete_target(&mut self, target: Id) {
        let doc = self.document.delete_target(target);
        self.replace("delete_target", doc);
    }

    pub fn duplicate_target(&mut self, target: Id) {
        let doc = self.document.duplicate_target(target);
        self.replace("duplicate_target", doc);
    }

    pub fn add_style(&mut self, target: Id) {
        let doc = self
            .document
            .add_style_with(target, &self.config.default_style_value);
        self.replace("add_style", doc);
    }

    pub fn update_style_value(&mut self, target: Id, style: Id, value: &str) {
        let doc = self.document.update_style_value(target, style, value);
        self.replace("update_style_value", doc);
    }

    pub fn delete_style(&mut self, target: Id, style: Id) {
        let doc = self.document.delete_style(target, style);
        self.replace("delete_style", doc);
    }

    pub fn duplicate_style(&mut self, target: Id, style: Id) {
        let doc = self.document.duplicate_style(target, style);
        self.replace("duplicate_style", doc);
    }

    pub fn drag_start(&mut self, item: DragItem) {
        self.gesture.start(item);
    }

    pub fn drag_over(&mut self, item: DragItem, placement: DropPlacement) {
        self.gesture.hover(item, placement);
    }

    pub fn drag_leave(&mut self) {
        self.gesture.clear_hover();
    }

    pub fn drag_end(&mut self) {
        self.gesture.end();
    }

    pub fn drop_dragged(&mut self) {
        let doc = self.gesture.drop_on(&self.document);
        self.replace("drop", doc);
    }
}

/// Clipboard that always fails; useful where no system clipboard exists.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(EditorError::Clipboard(
            "clipboard is not available".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Clipboard, NoClipboard, Notice, Session};
    use crate::{EditorConfig, Result, statics};

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl Clipboard for Recording {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn add_uses_configured_defaults() {
        let mut s = Session::new(EditorConfig {
            default_target_name: "T".to_string(),
            default_style_value: "S=1".to_string(),
            dark_theme: false,
        });
        s.add_target();
        let id = s.document().targets().next().unwrap().id;
        s.add_style(id);
        assert_eq!(
            s.document().outline(),
            vec![("T".to_string(), vec!["S=1".to_string()])]
        );
    }

    #[test]
    fn parse_error_empties_document_and_sets_error() {
        let mut s = Session::default();
        s.add_target();
        s.input_text = "{ nope".to_string();
        s.load_input();
        assert!(s.document().is_empty());
        match s.notice() {
            Some(Notice::Error(msg)) => assert!(msg.starts_with(statics::EN_ERR_PARSE_PREFIX)),
            other => panic!("expected error notice, got {other:?}"),
        }
    }

    #[test]
    fn success_replaces_error_notice() {
        let mut s = Session::default();
        s.input_text = "[]".to_string();
        s.load_input();
        assert!(matches!(s.notice(), Some(Notice::Error(_))));

        s.input_text = r#"{"controlStyles[0].target": "A"}"#.to_string();
        s.load_input();
        assert_eq!(
            s.notice(),
            Some(&Notice::Success(statics::EN_OK_LOADED.to_string()))
        );
        assert_eq!(s.document().len(), 1);
    }

    #[test]
    fn clipboard_failure_keeps_output_text() {
        let mut s = Session::default();
        s.add_target();
        s.generate_output(&mut NoClipboard);
        assert!(s.output_text.contains("controlStyles[0].target"));
        match s.notice() {
            Some(Notice::Error(msg)) => {
                assert!(msg.starts_with(statics::EN_ERR_GENERATE_PREFIX));
                assert!(msg.ends_with("clipboard is not available"));
            }
            other => panic!("expected error notice, got {other:?}"),
        }
    }

    #[test]
    fn generate_copies_output() {
        let mut s = Session::default();
        s.add_target();
        let mut clip = Recording::default();
        s.generate_output(&mut clip);
        assert_eq!(clip.0, vec![s.output_text.clone()]);
        assert_eq!(
            s.notice(),
            Some(&Notice::Success(statics::EN_OK_GENERATED.to_string()))
        );
    }
}
