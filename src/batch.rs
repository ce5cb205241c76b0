use crate::dispatch::{Package, read_package};
use crate::dlog;
use crate::report::Language;
use anyhow::{Context, Result};
use std::io::Write;

/// What to do when one package in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing package; nothing is written for it or
    /// for the packages after it.
    #[default]
    Abort,
    /// Log the failure and carry on with the next package.
    Skip,
}

/// Write one report line per package to `out`, in input order.
///
/// Lines for packages before a failure are already written when
/// [`BatchPolicy::Abort`] returns the error. Returns the number of lines
/// written.
pub fn process<W: Write>(
    packages: &[Package],
    lang: Language,
    policy: BatchPolicy,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0usize;
    let mut skipped = 0usize;

    for (i, p) in packages.iter().enumerate() {
        let line = read_package(&p.code, &p.data)
            .and_then(|w| w.show_training_info())
            .map(|info| info.render(lang));

        match (line, policy) {
            (Ok(line), _) => {
                dlog!("package={i} code={} ok", p.code);
                writeln!(out, "{line}").context("writing report line")?;
                written += 1;
            }
            (Err(e), BatchPolicy::Skip) => {
                tracing::warn!(package = i, code = %p.code, err = %e, "skipping package");
                skipped += 1;
            }
            (Err(e), BatchPolicy::Abort) => {
                return Err(e).with_context(|| format!("package #{} ({})", i + 1, p.code));
            }
        }
    }

    tracing::info!(written, skipped, "batch done");
    Ok(written)
}
