use style_organizer::{Clipboard, EditorError, Notice, Result, Session, codec, statics};

struct Denied;

impl Clipboard for Denied {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(EditorError::Clipboard("permission denied".to_string()))
    }
}

#[derive(Default)]
struct Capture(Option<String>);

impl Clipboard for Capture {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.0 = Some(text.to_string());
        Ok(())
    }
}

#[test]
fn load_edit_generate() {
    let mut session = Session::default();
    session.input_text =
        r#"{"controlStyles[0].target": "A", "controlStyles[0].styles[0]": "x=1"}"#.to_string();
    session.load_input();
    let a = session.document().targets().next().unwrap().id;
    session.add_style(a);

    let mut clip = Capture::default();
    session.generate_output(&mut clip);
    assert_eq!(clip.0.as_deref(), Some(session.output_text.as_str()));

    let back = codec::decode_str(&session.output_text).unwrap();
    assert_eq!(
        back.outline(),
        vec![(
            "A".to_string(),
            vec!["x=1".to_string(), statics::DEFAULT_STYLE_VALUE.to_string()]
        )]
    );
}

#[test]
fn parse_error_message_includes_parser_description() {
    let mut session = Session::default();
    session.input_text = r#"{"controlStyles[0].target": 5}"#.to_string();
    session.load_input();
    let Some(Notice::Error(msg)) = session.notice() else {
        panic!("expected error notice");
    };
    assert!(msg.starts_with(statics::EN_ERR_PARSE_PREFIX));
    assert!(msg.len() > statics::EN_ERR_PARSE_PREFIX.len() + 1);
    assert!(session.document().is_empty());
}

#[test]
fn clipboard_error_replaces_success_and_keeps_output() {
    let mut session = Session::default();
    session.input_text = r#"{"controlStyles[0].target": "A"}"#.to_string();
    session.load_input();
    assert!(matches!(session.notice(), Some(Notice::Success(_))));

    session.generate_output(&mut Denied);
    assert_eq!(
        session.notice(),
        Some(&Notice::Error(format!(
            "{} permission denied",
            statics::EN_ERR_GENERATE_PREFIX
        )))
    );
    assert_eq!(
        session.output_text,
        "{\n  \"controlStyles[0].target\": \"A\"\n}"
    );
}
