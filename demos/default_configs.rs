use bs_heatmap::{default_configs, SweepConfig};

fn describe(name: &str, config: &SweepConfig, use_case: &str) {
    let grid = config.run_grid();
    println!("{}:", name);
    println!(
        "   Strike axis: {} ..= {} step {}",
        config.strike_axis.start, config.strike_axis.stop, config.strike_axis.step
    );
    println!(
        "   Vol axis:    {}% ..= {}% step {}%",
        config.vol_axis_pct.start, config.vol_axis_pct.stop, config.vol_axis_pct.step
    );
    println!(
        "   Grid: {} rows x {} cols ({} evaluations)",
        grid.call.n_rows(),
        grid.call.n_cols(),
        grid.call.n_rows() * grid.call.n_cols()
    );
    println!("   Display decimals: {}", config.display_decimals);
    println!("   Use case: {}\n", use_case);
}

fn main() {
    println!("BS-Heatmap Default Configuration Examples\n");

    describe(
        "1. Desktop Configuration",
        &default_configs::desktop(),
        "Same starting point as the desktop form",
    );
    describe(
        "2. Fine Configuration",
        &default_configs::fine(),
        "Smooth heatmaps, presentation",
    );
    describe(
        "3. Coarse Configuration",
        &default_configs::coarse(),
        "Quick look in a terminal",
    );

    // Custom configuration from TOML, overriding only what differs
    let custom = SweepConfig::from_toml_str(
        r#"
        strike = 100.0

        [market]
        spot = 100.0
        rate = 0.05
        premium = 0.0

        [strike_axis]
        start = 80.0
        stop = 120.0
        step = 5.0
        "#,
    );
    match custom {
        Ok(config) => describe("4. Custom TOML Configuration", &config, "Anything else"),
        Err(e) => eprintln!("custom config failed: {:#}", e),
    }
}
