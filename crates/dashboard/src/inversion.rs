//! Thin runner over the external stress-inversion engine
//!
//! The dashboard never inspects the numerics; it logs progress and hands
//! the opaque result to whatever run-analysis visualizations are mounted.

use geostress_shared::{
    DataFile, InversionMethod, InversionParams, InversionResult, Result, StressInversion,
};

pub fn run_inversion(
    engine: &dyn StressInversion,
    method: InversionMethod,
    params: &InversionParams,
    files: &[DataFile],
) -> Result<InversionResult> {
    let datum_count: usize = files.iter().map(|f| f.rows.len()).sum();
    log::info!(
        "starting stress inversion: method={method}, {} files, {datum_count} data, {} iterations",
        files.len(),
        params.iterations
    );

    let result = engine.run(method, params, files).map_err(|e| {
        log::error!("stress inversion failed: {e}");
        e
    })?;

    log::info!(
        "inversion complete: R={:.3}, misfit={:.3} ({} iterations)",
        result.stress_ratio,
        result.misfit,
        result.iterations
    );
    Ok(result)
}
