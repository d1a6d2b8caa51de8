//! Draw Pass
//!
//! Queues one draw command per entity, in painter's order: food, shelter,
//! then people on top. Runs after the behavior pass and before the prune,
//! so a person dying this frame still appears on its final frame, while
//! staged newborns (not yet merged) do not.

use bevy_ecs::prelude::*;

use crate::components::entity::Color;
use crate::components::population::{FoodRegistry, Population, ShelterRegistry};
use crate::render::{DrawCommand, RenderQueue, Shape};

/// Fixed sprite sizes and resource colors
pub mod sprite {
    use super::Color;

    /// Food dot radius in pixels
    pub const FOOD_RADIUS: u32 = 2;
    /// Shelter dot radius in pixels
    pub const SHELTER_RADIUS: u32 = 2;
    /// Person square edge in pixels
    pub const PERSON_SIZE: u32 = 2;
    pub const FOOD_COLOR: Color = Color::new(255, 0, 0);
    pub const SHELTER_COLOR: Color = Color::new(0, 0, 255);
}

/// System: queue the frame's draw commands.
pub fn queue_entity_draws(
    food: Res<FoodRegistry>,
    shelter: Res<ShelterRegistry>,
    population: Res<Population>,
    mut queue: ResMut<RenderQueue>,
) {
    for item in &food.items {
        queue.commands.push(DrawCommand {
            position: item.position,
            shape: Shape::Circle {
                radius: sprite::FOOD_RADIUS,
            },
            color: sprite::FOOD_COLOR,
        });
    }
    for item in &shelter.items {
        queue.commands.push(DrawCommand {
            position: item.position,
            shape: Shape::Circle {
                radius: sprite::SHELTER_RADIUS,
            },
            color: sprite::SHELTER_COLOR,
        });
    }
    for person in &population.people {
        queue.commands.push(DrawCommand {
            position: person.position,
            shape: Shape::Rect {
                width: sprite::PERSON_SIZE,
                height: sprite::PERSON_SIZE,
            },
            color: person.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::{Color, Food, Person, PersonId, Point, Shelter};

    #[test]
    fn test_draws_queue_in_painter_order() {
        let mut world = World::new();
        world.insert_resource(FoodRegistry::new(vec![
            Food::at(Point::new(1.0, 1.0)),
            Food::at(Point::new(2.0, 2.0)),
        ]));
        world.insert_resource(ShelterRegistry::new(vec![Shelter::at(Point::new(
            3.0, 3.0,
        ))]));
        world.insert_resource(Population::from_people(vec![Person {
            id: PersonId(0),
            position: Point::new(4.0, 4.0),
            heading: 0.0,
            drift_rate: 0.0,
            drift: 0.0,
            energy: 50.0,
            sleepiness: 0.0,
            age: 0.0,
            color: Color::new(7, 8, 9),
            reproduced: false,
        }]));
        world.insert_resource(RenderQueue::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(queue_entity_draws);
        schedule.run(&mut world);

        let queue = world.resource::<RenderQueue>();
        assert_eq!(queue.commands.len(), 4);
        assert_eq!(queue.commands[0].color, sprite::FOOD_COLOR);
        assert_eq!(queue.commands[2].color, sprite::SHELTER_COLOR);
        assert_eq!(queue.commands[3].color, Color::new(7, 8, 9));
        assert_eq!(
            queue.commands[3].shape,
            Shape::Rect {
                width: sprite::PERSON_SIZE,
                height: sprite::PERSON_SIZE
            }
        );
    }
}
