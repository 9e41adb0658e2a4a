// src/main.rs

use nannou::prelude::*;
use std::time::Instant;

use snakevis::{
    animation::MorphEngine,
    config::*,
    models::Catalog,
    render::{centre_of_mass, node_centres, node_transforms, project},
};

const EXPLODE_STEP: f32 = 0.03;
const NODE_RADIUS: f32 = 0.38;

struct Model {
    // Core components:
    catalog: Catalog,
    snake: MorphEngine,
    random: rand::rngs::ThreadRng,

    // Animation settings
    animation: AnimationConfig,

    // Style
    explode: f32,
    titles: bool,

    // Continuous rotation
    rotang1: f32,
    rotang2: f32,

    // Modes
    paused: bool,
    interactive: bool,

    // Timing
    last_update: Instant,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the model catalog
    let mut catalog = Catalog::builtin();
    println!("Loaded {} models", catalog.len());
    if let Some(path) = config.resolve_models_path() {
        let added = catalog
            .extend_from_file(&path)
            .expect("Failed to load models file");
        println!("Loaded {} extra models from {}", added, path.display());
    }

    // Create window
    app.new_window()
        .title("snakevis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let mut random = rand::thread_rng();
    let snake = MorphEngine::new(
        &catalog,
        &config.animation,
        config.style.authentic,
        &mut random,
    );

    Model {
        catalog,
        snake,
        random,

        animation: config.animation,

        explode: config.style.explode,
        titles: config.style.titles,

        rotang1: 0.0,
        rotang2: 0.0,

        paused: false,
        interactive: false,

        last_update: Instant::now(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // next model
        Key::Period => {
            let next = (model.snake.next_model_index() + 1) % model.catalog.len();
            model.snake.start_morph(&model.catalog, next, false);
        }
        // previous model
        Key::Comma => {
            let len = model.catalog.len();
            let prev = (model.snake.next_model_index() + len - 1) % len;
            model.snake.start_morph(&model.catalog, prev, false);
        }
        Key::I => {
            model.interactive = !model.interactive;
        }
        Key::P => {
            model.paused = !model.paused;
        }
        Key::A => {
            model.snake.toggle_authentic();
        }
        // dump the current shape so it can be added to a models file
        Key::D => {
            println!("{}", model.snake.dump_line(&model.catalog));
        }
        Key::T => {
            model.titles = !model.titles;
        }
        Key::Equals => model.snake.accelerate(),
        Key::Minus => model.snake.decelerate(),
        Key::E => model.explode += EXPLODE_STEP,
        Key::X => model.explode = (model.explode - EXPLODE_STEP).max(0.0),

        // joint editing, only in interactive mode
        Key::Up if model.interactive => model.snake.select_prev_node(),
        Key::Down if model.interactive => model.snake.select_next_node(),
        Key::Left if model.interactive => model.snake.nudge_selected(1),
        Key::Right if model.interactive => model.snake.nudge_selected(-1),
        Key::Home if model.interactive => model.snake.reset_nodes(),
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    if model.paused {
        return;
    }

    if !model.interactive {
        // continuous spin
        model.rotang1 += 360.0 * model.animation.y_spin * dt;
        model.rotang2 += 360.0 * model.animation.z_spin * dt;

        model
            .snake
            .auto_advance(&model.catalog, dt * 1000.0, &mut model.random);
    }

    model.snake.update(dt * 1000.0);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let transforms = node_transforms(model.snake.nodes(), model.explode);
    let centres = node_centres(&transforms);
    let com = centre_of_mass(&centres);

    // fit roughly twelve chain units into the window height
    let rect = app.window_rect();
    let scale = rect.h() / 12.0;

    let points: Vec<Point2> = centres
        .iter()
        .map(|c| project(*c - com, model.rotang1, model.rotang2, scale))
        .collect();

    // chain backbone
    for pair in points.windows(2) {
        draw.line()
            .points(pair[0], pair[1])
            .color(rgba(1.0, 1.0, 1.0, 0.25))
            .stroke_weight(scale * 0.1);
    }

    // pieces, banded with the blended classification colours
    let colour = model.snake.colour();
    let selected = model.snake.selected();
    for (i, point) in points.iter().enumerate() {
        let fill = if model.interactive && (i == selected || i == selected + 1) {
            rgb(1.0, 1.0, 0.0)
        } else {
            colour.for_node(i)
        };
        draw.ellipse()
            .xy(*point)
            .radius(scale * NODE_RADIUS)
            .color(fill);
    }

    if model.titles {
        let title = if model.interactive {
            "interactive"
        } else {
            model.snake.model_name(&model.catalog)
        };
        draw.text(title)
            .x_y(rect.right() - 120.0, rect.bottom() + 20.0)
            .w(220.0)
            .right_justify()
            .color(WHITE);
    }

    draw.to_frame(app, &frame).unwrap();
}
