//! Atom tokenization
//!
//! Protocol lines are sequences of atoms: whitespace-delimited tokens
//! where a double-quoted span counts as one atom. Quoting is how names
//! containing spaces travel on the wire.

/// Split a protocol line into atoms
///
/// Double-quoted spans become a single atom with the quotes stripped;
/// a backslash inside a quoted span escapes the next character.
pub fn split_atoms(line: &str) -> Vec<String> {
    let mut atoms = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut in_atom = false;

    for ch in line.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => {
                in_quotes = !in_quotes;
                in_atom = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_atom {
                    atoms.push(std::mem::take(&mut current));
                    in_atom = false;
                }
            }
            c => {
                current.push(c);
                in_atom = true;
            }
        }
    }
    if in_atom {
        atoms.push(current);
    }

    atoms
}

/// Split the first atom off a line
///
/// Returns the atom and the untokenized remainder of the line with
/// leading whitespace removed, or `None` for a blank line. Listing
/// responses use this where the payload is "everything after the
/// identifier" rather than an atom sequence.
pub fn split_first_atom(line: &str) -> Option<(String, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }

    if let Some(stripped) = line.strip_prefix('"') {
        let mut atom = String::new();
        let mut escaped = false;
        for (i, ch) in stripped.char_indices() {
            if escaped {
                atom.push(ch);
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '"' => return Some((atom, stripped[i + 1..].trim_start())),
                c => atom.push(c),
            }
        }
        // Unterminated quote, the span runs to end of line
        return Some((atom, ""));
    }

    match line.split_once(char::is_whitespace) {
        Some((atom, rest)) => Some((atom.to_string(), rest.trim_start())),
        None => Some((line.to_string(), "")),
    }
}

/// Quote an outgoing atom if it needs it
///
/// Atoms containing whitespace or quote characters, and empty atoms, are
/// wrapped in double quotes with `"` and `\` backslash-escaped. Everything
/// else passes through unchanged, including the `*` and `!` selectors.
pub fn quote_atom(atom: &str) -> String {
    let needs_quoting =
        atom.is_empty() || atom.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if needs_quoting {
        quote_atom_always(atom)
    } else {
        atom.to_string()
    }
}

/// Quote an outgoing atom unconditionally
pub fn quote_atom_always(atom: &str) -> String {
    let mut quoted = String::with_capacity(atom.len() + 2);
    quoted.push('"');
    for ch in atom.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
