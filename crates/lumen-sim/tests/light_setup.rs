use glam::Vec3;
use lumen_lighting::{LightInfo, NO_LIGHT_KEY};
use lumen_sim::{Simulation, SimulationConfig};

fn simulation() -> Simulation {
    let _ = env_logger::builder().is_test(true).try_init();
    Simulation::new(SimulationConfig::default()).unwrap()
}

#[test]
fn fresh_simulation_has_no_lights() {
    let sim = simulation();
    assert_eq!(sim.get_light_setup().len(), 0);
}

#[test]
fn set_then_get_returns_equal_setup() {
    let sim = simulation();

    let mut setup = sim.get_light_setup();
    assert_eq!(setup.len(), 0);

    setup.push(LightInfo::new(Vec3::new(1.0, 1.0, 1.0)));
    sim.set_light_setup(setup.clone()).unwrap();

    assert_eq!(sim.get_light_setup(), setup);
}

#[test]
fn setting_the_empty_setup_clears_lights() {
    let sim = simulation();

    sim.set_light_setup(vec![
        LightInfo::new(Vec3::X),
        LightInfo::new(Vec3::Y).with_intensity(2.0),
    ])
    .unwrap();
    assert_eq!(sim.get_light_setup().len(), 2);

    sim.set_light_setup(Vec::new()).unwrap();
    assert_eq!(sim.get_light_setup().len(), 0);
}

#[test]
fn setup_order_is_preserved() {
    let sim = simulation();

    let setup = vec![
        LightInfo::new(Vec3::new(1.0, 0.0, 0.0)),
        LightInfo::new(Vec3::new(0.0, 1.0, 0.0)),
        LightInfo::new(Vec3::new(0.0, 0.0, 1.0)),
    ];
    sim.set_light_setup(setup.clone()).unwrap();

    let returned = sim.get_light_setup();
    assert_eq!(returned, setup);
    assert_eq!(returned[0].position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(returned[2].position, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn keyed_setups_are_independent_of_the_scene_setup() {
    let sim = simulation();

    sim.set_light_setup_for("lamp_rig", vec![LightInfo::new(Vec3::ONE)])
        .unwrap();

    assert_eq!(sim.get_light_setup().len(), 0);
    assert_eq!(sim.get_light_setup_for("lamp_rig").len(), 1);
    // Unknown keys read as empty.
    assert_eq!(sim.get_light_setup_for("unknown").len(), 0);
}

#[test]
fn no_light_setup_stays_empty() {
    let sim = simulation();

    assert!(sim
        .set_light_setup_for(NO_LIGHT_KEY, vec![LightInfo::new(Vec3::ONE)])
        .is_err());
    assert_eq!(sim.get_light_setup_for(NO_LIGHT_KEY).len(), 0);
}

#[test]
fn custom_scene_light_key_round_trips() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = SimulationConfig {
        scene_light_setup_key: "studio".to_string(),
        ..SimulationConfig::default()
    };
    let sim = Simulation::new(config).unwrap();

    assert_eq!(sim.get_light_setup().len(), 0);

    let setup = vec![LightInfo::new(Vec3::new(0.0, 5.0, 0.0)).with_color(Vec3::new(1.0, 0.9, 0.8))];
    sim.set_light_setup(setup.clone()).unwrap();

    assert_eq!(sim.get_light_setup(), setup);
    assert_eq!(sim.get_light_setup_for("studio"), setup);
}
