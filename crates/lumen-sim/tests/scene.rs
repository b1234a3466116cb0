use glam::Vec3;
use lumen_lighting::{LightInfo, LightPositionModel, NO_LIGHT_KEY};
use lumen_sim::{Simulation, SimulationConfig};

fn simulation() -> Simulation {
    let _ = env_logger::builder().is_test(true).try_init();
    Simulation::new(SimulationConfig::default()).unwrap()
}

#[test]
fn drawables_can_opt_out_of_lighting() {
    let mut sim = simulation();
    let node = sim
        .scene_graph()
        .create_child_node(sim.scene_graph().root_node())
        .unwrap();

    let group_id = sim.config().default_drawable_group_id.clone();
    let drawable = sim.drawables_mut().create_drawable(&group_id, node).unwrap();

    sim.drawables_mut()
        .get_drawable_mut(drawable)
        .unwrap()
        .light_setup_key = NO_LIGHT_KEY.to_string();

    let key = sim
        .drawables()
        .get_drawable(drawable)
        .unwrap()
        .light_setup_key
        .clone();
    assert_eq!(sim.get_light_setup_for(&key).len(), 0);
}

#[test]
fn drawable_lights_resolve_through_the_default_camera() {
    let mut sim = simulation();

    sim.set_light_setup(vec![LightInfo::new(Vec3::new(0.0, 10.0, 0.0))])
        .unwrap();

    let node = sim
        .scene_graph()
        .create_child_node(sim.scene_graph().root_node())
        .unwrap();
    let group_id = sim.config().default_drawable_group_id.clone();
    let drawable_id = sim.drawables_mut().create_drawable(&group_id, node).unwrap();

    let drawable = sim.drawables().get_drawable(drawable_id).unwrap();
    assert_eq!(drawable.light_position_model, LightPositionModel::Global);

    let camera_matrix = sim.scene_graph().default_render_camera.camera_matrix();
    let modelview = camera_matrix * sim.scene_graph().world_transform(node).unwrap();

    let setup = sim.get_light_setup_for(&drawable.light_setup_key);
    let eye = setup[0].position_in_eye_space(camera_matrix, modelview);

    // Default camera sits at the origin looking down -Z, so a world-space
    // light keeps its position in eye space.
    assert!((eye - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-5);
}

#[test]
fn scene_graph_and_drawables_start_minimal() {
    let sim = simulation();
    // Root plus the default camera node.
    assert_eq!(sim.scene_graph().node_count(), 2);
    assert_eq!(sim.drawables().drawable_count(), 0);
    assert!(sim.drawables().default_drawable_group().is_empty());
}
