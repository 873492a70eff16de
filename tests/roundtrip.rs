use argv_codec::{ArgvCodec, Dialect, DialectKind};
use pretty_assertions::assert_eq;

const WINDOWS_ALPHABET: &[char] = &['a', ' ', '\t', '"', '\\', '^', '&', '|', '<', '>'];
const POSIX_ALPHABET: &[char] = &[
    'a', ' ', '\t', '"', '\'', '\\', '$', '`', '&', '|', '<', '>', '*', '(', ')', ';', '~',
];

fn alphabet(kind: DialectKind) -> &'static [char] {
    match kind {
        DialectKind::WindowsCmd | DialectKind::WindowsCreateProcess => WINDOWS_ALPHABET,
        DialectKind::PosixShell => POSIX_ALPHABET,
    }
}

/// Every string over `alphabet` up to `max_len` characters, shortest first.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        out.extend(next.iter().cloned());
        layer = next;
    }
    out
}

#[test]
fn single_arguments_survive_encode_decode() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        for arg in all_strings(alphabet(kind), 4) {
            let line = codec.encode(&[&arg]);
            assert_eq!(
                codec.decode(&line),
                vec![arg.clone()],
                "{kind}: {arg:?} encoded as {line:?}"
            );
        }
    }
}

#[test]
fn argument_pairs_survive_encode_decode() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        let words = all_strings(alphabet(kind), 2);
        for first in &words {
            for second in &words {
                let args = [first.as_str(), second.as_str()];
                let line = codec.encode(&args);
                assert_eq!(codec.decode(&line), args, "{kind}: {args:?} encoded as {line:?}");
            }
        }
    }
}

/// Separators, quotes, escape character and every character the dialect
/// treats specially, taken from the dialect tables themselves.
fn special_alphabet(dialect: &Dialect) -> Vec<char> {
    let mut chars = vec!['a', ' ', '\t', '\\', dialect.escape_char];
    chars.extend(dialect.quote_chars);
    chars.extend(dialect.shell_metacharacters);
    if dialect.kind == DialectKind::PosixShell {
        chars.extend(Dialect::POSIX_BASIC_METACHARACTERS);
        chars.extend(Dialect::POSIX_SUBSTITUTION_CHARACTERS);
        chars.extend(Dialect::POSIX_UNQUOTED_SPECIALS);
    } else {
        chars.push('^');
    }
    chars.sort_unstable();
    chars.dedup();
    chars
}

#[test]
fn every_special_character_survives_encode_decode() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        let alphabet = special_alphabet(codec.dialect());
        for arg in all_strings(&alphabet, 3) {
            let line = codec.encode(&[&arg]);
            assert_eq!(codec.decode(&line), [arg.as_str()], "{kind}: {arg:?} as {line:?}");
        }
    }
}

#[test]
fn argument_triples_keep_quote_state_apart() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        let words = all_strings(&special_alphabet(codec.dialect()), 1);
        for first in &words {
            for second in &words {
                for third in &words {
                    let args = [first.as_str(), second.as_str(), third.as_str()];
                    let line = codec.encode(&args);
                    assert_eq!(codec.decode(&line), args, "{kind}: {args:?} as {line:?}");
                }
            }
        }
    }
}

#[test]
fn decoding_is_stable_under_reencoding() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        for line in all_strings(alphabet(kind), 4) {
            let decoded = codec.decode(&line);
            let again = codec.decode(&codec.encode(&decoded));
            assert_eq!(again, decoded, "{kind}: {line:?}");
        }
    }
}

#[test]
fn empty_argument_is_preserved_everywhere() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        assert_eq!(codec.decode(&codec.encode(&[""])), vec![String::new()], "{kind}");
        assert_eq!(codec.decode(&codec.encode(&["", "", "x"])), ["", "", "x"], "{kind}");
    }
}

#[test]
fn long_backslash_runs_keep_their_parity() {
    for kind in DialectKind::ALL {
        let codec = ArgvCodec::new(kind);
        for n in 0..9 {
            let run = "\\".repeat(n);
            let args = [
                run.clone(),
                format!("{run}\""),
                format!("a b{run}"),
                format!("\"{run}\"{run}"),
                format!("x{run}&{run}y z"),
            ];
            assert_eq!(codec.decode(&codec.encode(&args)), args, "{kind}: run of {n}");
        }
    }
}

#[test]
fn concrete_scenarios() {
    let cmd = ArgvCodec::new(DialectKind::WindowsCmd);
    assert_eq!(cmd.encode(&["test&whoami"]), "test^&whoami");
    assert_eq!(cmd.decode("test^&whoami"), ["test&whoami"]);
    assert_eq!(cmd.decode(r#"a""b"#), ["ab"]);

    let win32 = ArgvCodec::new(DialectKind::WindowsCreateProcess);
    assert_eq!(win32.encode(&["test&whoami"]), "test&whoami");
    assert_eq!(win32.decode("a^b"), ["a^b"]);

    let posix = ArgvCodec::new(DialectKind::PosixShell);
    assert_eq!(posix.encode(&["a b c"]), r#""a b c""#);
    assert_eq!(posix.encode(&[r#"Toys "R" Us"#]), r#"'Toys "R" Us'"#);
    assert_eq!(posix.encode(&["a&b"]), r"a\&b");
    assert_eq!(posix.decode(r"a\&b"), ["a&b"]);
}
