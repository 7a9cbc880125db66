//! Table of contents

use super::Session;

/// Print one character per letter, `a` through `z`
pub fn run(session: &Session, hide_missing: bool) {
    let marker = (!hide_missing).then_some(session.config.toc_missing_marker);
    println!("{}", session.dictionary.table_of_contents().render_with(marker));
}
