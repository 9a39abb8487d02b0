use unshatterable_types::{
    Block, Category, Collision, EventTarget, MaterialInstance, Permutation, RenderMethod,
    TypeResult,
};

/// The demo blocks, in registration order.
pub fn blocks() -> TypeResult<Vec<(&'static str, Block)>> {
    Ok(vec![
        ("example:block", example_block()?),
        ("example:empty_block", Block::new(Category::None)),
    ])
}

fn example_block() -> TypeResult<Block> {
    let lit = Permutation::new().light_absorption(1).break_on_push(true);

    let init = Permutation::new()
        .light_emission(1)
        .only_piston_push(true)
        .prevents_jumping(true)
        .random_ticking(Some("abc"), Some(EventTarget::SelfTarget), None)
        .ticking([1.0, 3.0], Some(true), Some("def"), None, None)
        .unit_cube()
        .unwalkable(true)
        .friction(1.0)
        .material_instances([
            ("*", MaterialInstance::new("dirt", RenderMethod::Opaque)),
            ("south", MaterialInstance::new("stone", RenderMethod::AlphaTest)),
        ])
        .map_color("95eb34")
        .entity_collision(Collision::Disabled);

    Ok(Block::new(Category::Nature)
        .register_property("example:property", [0, 1, 2, 3, 4])?
        .register_permutation(lit, "example:property", 4)?
        .with_init(init))
}
