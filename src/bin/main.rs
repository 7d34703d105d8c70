use factory_audit_dashboard::{
    components::{Top, TopProps},
    objects::DashboardConfig,
    utils,
};

fn main() {
    let (config, load_error) = match utils::load_config() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = load_error {
        log::warn!("could not load configuration, using defaults: {}", e);
    }

    yew::start_app_with_props::<Top>(TopProps { config });
}
