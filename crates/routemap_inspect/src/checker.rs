use anyhow::Result;
use log::{debug, info};

use routemap_core::build_route_configuration;

use crate::{config::Config, conflicts::find_conflicts, types::ScanResult};

pub fn run_route_scan(mut cfg: Config) -> Result<ScanResult> {
    info!("Starting route scan");

    cfg.initialize()?;
    let scan_cfg = cfg.scan_config()?;
    debug!(
        "Scan config: routes_dir={}, extension={}, middleware={}, generation_dir={:?}",
        scan_cfg.routes_dir,
        scan_cfg.route_extension,
        scan_cfg.middleware_name,
        scan_cfg.generation_dir
    );

    let configuration = build_route_configuration(&scan_cfg)?;
    let conflicts = find_conflicts(&configuration);

    let result = ScanResult { configuration, conflicts };
    info!(
        "Route scan complete: {} directories, {} routes, {} middleware, {} conflicts",
        result.directory_count(),
        result.route_count(),
        result.middleware_count(),
        result.conflicts.len()
    );
    Ok(result)
}
