use metartrans::{
    Atom, Error, Handler, MatchRule, ParseOptions, Parser, StepOutcome, TranslationError, translate_remarks,
    translate_remarks_verbose, translate_remarks_with,
};

#[test]
fn typical_us_remarks() {
    let out = translate_remarks("RMK AO2 PK WND 29036/1612 WSHFT 1600 FROPA SLP996 T10221056 $").unwrap();
    let pairs: Vec<(&str, &str)> = out.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("RMK", "Remarks"),
            ("AO2", "Automated station with a precipitation discriminator"),
            ("PK WND 29036/1612", "Peak wind 290 at 36kt at 1612"),
            ("WSHFT 1600 FROPA", "Wind shift at 1600 due to frontal passage"),
            ("SLP996", "Sea level pressure 999.6 hPa"),
            ("T10221056", "Temperature -2.2°C (28°F), dewpoint -5.6°C (22°F)"),
            ("$", "Maintenance is needed on the system"),
        ]
    );
}

#[test]
fn lenient_mode_through_public_api() {
    let opts = ParseOptions::lenient().error_prefix("?? ");
    let out = translate_remarks_with("RMK TSB2460 VIRGA SW", &opts).unwrap();
    assert_eq!(out.get("Begin/End Precip/TS"), Some("?? invalid time '2460'"));
    assert_eq!(out.get("VIRGA SW"), Some("Virga to the southwest"));

    let err = translate_remarks("RMK TSB2460 VIRGA SW").unwrap_err();
    assert!(matches!(err, Error::Translation(TranslationError::InvalidTime { .. })));
}

#[test]
fn trace_lists_failure_and_leftover() {
    let run = translate_remarks_verbose("RMK TSB2460 SNINCR 1/8", &ParseOptions::lenient()).unwrap();
    assert_eq!(run.metrics.failures(), 1);
    assert!(matches!(run.metrics.steps[1].outcome, StepOutcome::Failed { .. }));
    assert_eq!(run.metrics.leftover, "TSB2460 SNINCR 1/8");
}

#[test]
fn custom_parser_from_public_types() {
    let knots = Atom::from_pattern("Knots", r"(?P<speed>\d+)KT").unwrap();
    let calm = Atom::new("Calm", MatchRule::Literal("CALM".into())).unwrap();

    let mut parser = Parser::new();
    parser.register(Handler::with_atom_fn(knots, |atom, input| {
        let fields = atom.decode(input);
        Ok(format!("{} knots", fields.require("speed")?))
    }));
    let calm_id = parser.register(Handler::constant(calm.clone(), "Wind calm"));

    let out = parser.parse("15KT CALM 20KT", &ParseOptions::default()).unwrap();
    assert_eq!(out.iter().collect::<Vec<_>>(), vec![("15KT", "15 knots"), ("20KT", "20 knots"), ("CALM", "Wind calm")]);

    parser.unregister(calm_id).unwrap();
    assert!(parser.parse("CALM", &ParseOptions::default()).unwrap().is_empty());

    // Literal rules have no captures to hand to a captures translator.
    let err = Handler::with_captures_fn(calm, |caps| Ok(caps[0].to_string())).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}
