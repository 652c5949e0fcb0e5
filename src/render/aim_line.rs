use crate::launcher::LineSink;
use bevy::prelude::*;
use bevy_polyline::prelude::*;

/// A two-point line shown while aiming.
///
/// The polyline it is attached to only mirrors this state, see
/// [`sync_aim_lines`].
#[derive(Clone, Debug, Default, Component)]
pub struct AimLine {
    enabled: bool,
    points: Vec<Vec3>,
}

impl AimLine {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

impl LineSink for AimLine {
    fn draw(&mut self, start: Vec3, end: Vec3) {
        self.enabled = true;
        self.points.clear();
        self.points.extend([start, end]);
    }

    fn erase(&mut self) {
        self.enabled = false;
        self.points.clear();
    }
}

impl LineSink for Mut<'_, AimLine> {
    fn draw(&mut self, start: Vec3, end: Vec3) {
        (**self).draw(start, end)
    }

    fn erase(&mut self) {
        // Don’t trigger change detection for lines that are already erased.
        if self.is_enabled() || self.point_count() != 0 {
            (**self).erase()
        }
    }
}

#[derive(Bundle)]
pub struct AimLineBundle {
    pub line: AimLine,
    pub polyline: PolylineBundle,
}

impl AimLineBundle {
    pub fn new(
        polylines: &mut Assets<Polyline>,
        materials: &mut Assets<PolylineMaterial>,
        color: LinearRgba,
    ) -> Self {
        Self {
            line: AimLine::default(),
            polyline: PolylineBundle {
                polyline: polylines.add(Polyline::default()),
                material: materials.add(PolylineMaterial {
                    width: 3.0,
                    color,
                    perspective: false,
                    ..Default::default()
                }),
                visibility: Visibility::Hidden,
                ..Default::default()
            },
        }
    }
}

pub fn sync_aim_lines(
    mut polylines: ResMut<Assets<Polyline>>,
    mut lines: Query<(&AimLine, &Handle<Polyline>, &mut Visibility), Changed<AimLine>>,
) {
    for (line, handle, mut visibility) in lines.iter_mut() {
        if let Some(polyline) = polylines.get_mut(handle) {
            polyline.vertices.clear();
            polyline.vertices.extend_from_slice(line.points());
        }

        *visibility = if line.is_enabled() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_replaces_the_points() {
        let mut line = AimLine::default();
        line.draw(Vec3::ZERO, Vec3::X);
        line.draw(Vec3::Y, Vec3::Z);

        assert!(line.is_enabled());
        assert_eq!(line.points(), &[Vec3::Y, Vec3::Z]);
    }

    #[test]
    fn erase_is_idempotent() {
        let mut line = AimLine::default();
        line.draw(Vec3::ZERO, Vec3::X);

        line.erase();
        assert!(!line.is_enabled());
        assert_eq!(line.point_count(), 0);

        line.erase();
        assert!(!line.is_enabled());
        assert_eq!(line.point_count(), 0);
    }

    #[test]
    fn erasing_an_erased_line_component_is_not_a_change() {
        let mut world = World::new();
        let entity = world.spawn(AimLine::default()).id();
        world.clear_trackers();

        let mut changed = world.query_filtered::<(), Changed<AimLine>>();
        LineSink::erase(&mut world.get_mut::<AimLine>(entity).unwrap());
        assert!(changed.get(&world, entity).is_err());

        LineSink::draw(
            &mut world.get_mut::<AimLine>(entity).unwrap(),
            Vec3::ZERO,
            Vec3::X,
        );
        assert!(changed.get(&world, entity).is_ok());

        world.clear_trackers();
        LineSink::erase(&mut world.get_mut::<AimLine>(entity).unwrap());
        assert!(changed.get(&world, entity).is_ok());
        assert!(!world.get::<AimLine>(entity).unwrap().is_enabled());
    }

    #[test]
    fn polyline_follows_the_aim_line() {
        let mut app = App::new();
        app.insert_resource(Assets::<Polyline>::default())
            .add_systems(PostUpdate, sync_aim_lines);

        let handle = app
            .world_mut()
            .resource_mut::<Assets<Polyline>>()
            .add(Polyline::default());
        let entity = app
            .world_mut()
            .spawn((AimLine::default(), handle.clone(), Visibility::Hidden))
            .id();

        app.world_mut()
            .get_mut::<AimLine>(entity)
            .unwrap()
            .draw(Vec3::ZERO, Vec3::ONE);
        app.update();

        let polylines = app.world().resource::<Assets<Polyline>>();
        assert_eq!(
            polylines.get(&handle).unwrap().vertices,
            vec![Vec3::ZERO, Vec3::ONE]
        );
        assert_eq!(
            app.world().get::<Visibility>(entity),
            Some(&Visibility::Inherited)
        );

        app.world_mut().get_mut::<AimLine>(entity).unwrap().erase();
        app.update();

        let polylines = app.world().resource::<Assets<Polyline>>();
        assert!(polylines.get(&handle).unwrap().vertices.is_empty());
        assert_eq!(
            app.world().get::<Visibility>(entity),
            Some(&Visibility::Hidden)
        );
    }
}
