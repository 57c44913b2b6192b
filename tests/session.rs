use pvo::{config::Config, repl::Session};

fn session_output(config: Config, input: &str) -> String {
    let mut session = Session::new(config, Vec::new()).unwrap();
    session.run(input.as_bytes()).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.colour = false;
    config.trace = false;
    config.prompt = String::new();
    config
}

mod session {
    use super::*;

    #[test]
    fn errors_do_not_end_a_session() {
        let written = session_output(quiet_config(), "zzzz\nand - x\nor - ff\n");
        assert_eq!(written, "?\n?\ntttf\nfalse\n\n");
    }

    #[test]
    fn invalid_text_does_not_end_a_session() {
        let mut session = Session::new(quiet_config(), Vec::new()).unwrap();
        session.run(&b"and\n\xff\xfe\nor\n"[..]).unwrap();

        let written = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(written, "tfff\n?\ntttf\n\n");
    }

    #[test]
    fn configured_aliases() {
        let mut config = Config::from_toml_str(
            r#"
trace = false
colour = false
prompt = ""

[aliases]
neg = "ft"
implies = "cpq"
"#,
        )
        .unwrap();
        config.max_arity.set(4).unwrap();

        let written = session_output(config, "and neg\nimplies - ft\nand and and and\n");
        assert_eq!(written, "fttt\ntrue\n?\n\n");
    }

    #[test]
    fn traced() {
        let mut config = quiet_config();
        config.trace = true;

        let written = session_output(config, "t and\n");
        assert_eq!(written, "and = kpq\nkpq = tfff\n\ntf\n\n");
    }

    #[test]
    fn help_lists_configured_aliases() {
        let config = Config {
            aliases: vec![("neg".to_string(), "ft".to_string())],
            ..quiet_config()
        };

        let written = session_output(config, "help\n");
        assert!(written.contains("\nneg = ft\n"));
        assert!(written.contains("\nllpq = ttff\n"));
    }
}
