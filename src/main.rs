use std::env;
use std::f64::consts::PI;

use log::error;

use tanhsinh::configuration::Configuration;
use tanhsinh::manager::manager::IManager;
use tanhsinh::math::integration::quadraturemanager::DEFAULT_QUADRATURE_NAME;

struct Example {
    label: &'static str,
    f: fn(f64, &()) -> f64,
    a: f64,
    b: f64,
    exact: f64
}

fn examples() -> Vec<Example> {
    vec![
        Example { label: "x^(-1/2) on [0, 1]", f: |x, _| x.powf(-0.5), a: 0.0, b: 1.0, exact: 2.0 },
        Example { label: "(1-x)^(-0.8) on [0, 1]", f: |x, _| (1.0 - x).powf(-0.8), a: 0.0, b: 1.0, exact: 5.0 },
        Example { label: "1/((x-1/2)^2+1e-3) on [0, 1]", f: |x, _| 1.0 / ((x - 0.5).powi(2) + 1e-3), a: 0.0, b: 1.0, exact: 95.35120322775237 },
        Example { label: "exp(-x^2) on (-inf, inf)", f: |x, _| (-x * x).exp(), a: f64::NEG_INFINITY, b: f64::INFINITY, exact: PI.sqrt() },
        Example { label: "1/(1+x^2) on (-inf, inf)", f: |x, _| 1.0 / (1.0 + x * x), a: f64::NEG_INFINITY, b: f64::INFINITY, exact: PI },
        Example { label: "exp(-x) on [0, inf)", f: |x, _| (-x).exp(), a: 0.0, b: f64::INFINITY, exact: 1.0 },
        Example { label: "exp(x) on (-inf, 0]", f: |x, _| x.exp(), a: f64::NEG_INFINITY, b: 0.0, exact: 1.0 },
        Example { label: "x^2 on [1, 0]", f: |x, _| x * x, a: 1.0, b: 0.0, exact: -1.0 / 3.0 }
    ]
}

/// 用法：tanhsinh [config.json] [preset]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config = Configuration::new();
    if let Some(config_path) = args.get(1) {
        if let Err(err) = config.from_reader(config_path) {
            error!("failed to load configuration '{}': {}", config_path, err);
            std::process::exit(1);
        }
    }
    let preset_name = args.get(2).map_or(DEFAULT_QUADRATURE_NAME, |name| name.as_str());
    let quadrature = match config.quadrature_manager().get(preset_name) {
        Ok(quadrature) => quadrature,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    println!("preset '{}': levels = {}, eps = {:e}", preset_name, quadrature.levels(), quadrature.eps());
    for example in examples() {
        match quadrature.integrate(&example.f, example.a, example.b, &()) {
            Ok(result) => {
                println!("{:<32} value = {:<22} err = {:<12.3e} actual = {:.3e}{}",
                         example.label,
                         result.value(),
                         result.error(),
                         (result.value() - example.exact).abs(),
                         if result.is_within(quadrature.eps()) { "" } else { "  (not converged)" });
            },
            Err(err) => error!("{}: {}", example.label, err)
        }
    }
}
