#[cfg(test)]
mod tests {
    use binfill::entities::{Container, Item};
    use binfill::geometry::Rect;
    use binfill::space::{FreeRegion, OccupancyGrid, WallSide, find_next};
    use binfill::util::assertions;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn container_with(
        length: usize,
        width: usize,
        placed: &[(usize, usize, usize, usize)],
    ) -> Container {
        let mut container = Container::try_new(length, width).unwrap();
        for (id, &(x, y, l, w)) in placed.iter().enumerate() {
            container.place(Item::try_new(id as u64, l, w).unwrap(), x, y);
        }
        container
    }

    fn rect(x: usize, y: usize, length: usize, width: usize) -> Rect {
        Rect::try_new(x, y, length, width).unwrap()
    }

    fn region(
        x: usize,
        y: usize,
        length: usize,
        width: usize,
        left_wall: usize,
        right_wall: usize,
    ) -> FreeRegion {
        FreeRegion {
            rect: rect(x, y, length, width),
            left_wall,
            right_wall,
        }
    }

    /// Fills a container with random items wherever they happen to fit
    fn random_container(
        rng: &mut impl Rng,
        length: usize,
        width: usize,
        attempts: usize,
    ) -> Container {
        let mut container = Container::try_new(length, width).unwrap();
        for id in 0..attempts as u64 {
            let l = rng.random_range(1..=length.div_ceil(2));
            let w = rng.random_range(1..=width.div_ceil(2));
            let x = rng.random_range(0..=length - l);
            let y = rng.random_range(0..=width - w);
            let footprint = rect(x, y, l, w);
            if container.occupancy().is_free(&footprint) {
                container.place(Item::try_new(id, l, w).unwrap(), x, y);
            }
        }
        container
    }

    #[test]
    fn empty_container_has_empty_grid() {
        let container = container_with(7, 3, &[]);
        let grid = OccupancyGrid::build(&container);
        assert_eq!((grid.length(), grid.width()), (7, 3));
        assert_eq!(grid.n_free_cells(), 21);
        assert!(grid.is_free(&container.bbox()));
    }

    #[test]
    fn grid_marks_covered_cells() {
        let container = container_with(5, 4, &[(1, 1, 2, 3), (4, 0, 1, 1)]);
        let grid = container.occupancy();

        assert!(grid.is_filled(1, 1));
        assert!(grid.is_filled(2, 3));
        assert!(grid.is_filled(4, 0));
        assert!(!grid.is_filled(0, 0));
        assert!(!grid.is_filled(3, 1));
        assert!(!grid.is_filled(1, 0));
        assert_eq!(grid.n_free_cells(), 20 - 6 - 1);
        assert!(!grid.is_free(&rect(0, 0, 2, 2)));
        assert!(grid.is_free(&rect(3, 1, 2, 3)));
        // out of bounds is never free
        assert!(!grid.is_free(&rect(4, 1, 2, 1)));
        assert!(assertions::grid_matches_container(&grid, &container));
    }

    #[test]
    fn empty_container_yields_single_region() {
        init_logger();
        let grid = container_with(10, 10, &[]).occupancy();

        let first = find_next(&grid, &[]);
        assert_eq!(first, Some(region(0, 0, 10, 10, 10, 10)));
        assert_eq!(find_next(&grid, &[first.unwrap()]), None);
        assert_eq!(grid.free_regions().count(), 1);
    }

    #[test]
    fn full_container_yields_nothing() {
        let grid = container_with(4, 3, &[(0, 0, 4, 3)]).occupancy();
        assert_eq!(grid.n_free_cells(), 0);
        assert_eq!(find_next(&grid, &[]), None);
    }

    #[test]
    fn single_free_cell_is_a_region() {
        let grid = container_with(3, 3, &[(0, 0, 3, 2), (0, 2, 2, 1)]).occupancy();

        let regions = grid.free_regions().collect::<Vec<_>>();
        assert_eq!(regions, vec![region(2, 2, 1, 1, 1, 1)]);
    }

    #[test]
    fn regions_after_corner_placement() {
        init_logger();
        let grid = container_with(4, 4, &[(0, 0, 2, 2)]).occupancy();

        let regions = grid.free_regions().collect::<Vec<_>>();
        assert_eq!(
            regions,
            vec![region(2, 0, 2, 4, 2, 4), region(0, 2, 4, 2, 2, 2)]
        );
    }

    #[test]
    fn wall_heights_follow_adjacent_columns() {
        init_logger();
        let grid = container_with(6, 4, &[(0, 0, 1, 3), (3, 0, 3, 1)]).occupancy();

        let mut regions = grid.free_regions();
        let first = regions.next().unwrap();
        assert_eq!(first, region(1, 0, 2, 4, 3, 1));
        assert_eq!(first.wall(), 3);
        assert_eq!(first.preferred_wall(WallSide::Right), WallSide::Left);

        let second = regions.next().unwrap();
        assert_eq!(second, region(1, 1, 5, 3, 2, 3));
        assert_eq!(second.preferred_wall(WallSide::Left), WallSide::Right);
        assert_eq!(regions.found().len(), 2);
    }

    #[test]
    fn greedy_extents_are_independent() {
        // the column above the anchor is free, but the cell diagonal to it is not
        let grid = container_with(3, 3, &[(1, 1, 1, 1)]).occupancy();

        let first = find_next(&grid, &[]).unwrap();
        assert_eq!(first.rect, rect(0, 0, 3, 3));
        assert!(!grid.is_free(&first.rect));
        assert!(assertions::region_is_consistent(&grid, &first));
    }

    #[test]
    fn scan_resumes_after_last_region() {
        let grid = container_with(4, 2, &[(1, 0, 1, 1)]).occupancy();

        // a prior region that does not contain any candidate still moves the cursor
        let prior = region(2, 0, 1, 1, 0, 0);
        let next = find_next(&grid, &[prior]).unwrap();
        assert_eq!(next.rect, rect(3, 0, 1, 2));
    }

    #[test]
    fn anchor_is_flush_against_the_wall() {
        let r = region(2, 1, 5, 3, 0, 0);
        let item = Item::try_new(0, 3, 1).unwrap();
        assert_eq!(r.anchor_for(&item, WallSide::Left), (2, 1));
        assert_eq!(r.anchor_for(&item, WallSide::Right), (4, 1));
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    #[test_case(4; "seed 4")]
    fn regions_are_never_redundant(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let container = random_container(&mut rng, 24, 16, 30);
        let grid = container.occupancy();
        assert!(assertions::grid_matches_container(&grid, &container));
        assert!(assertions::placements_within_container(&container));
        assert!(assertions::placements_are_disjoint(container.placements()));

        let regions = grid.free_regions().collect::<Vec<_>>();
        // each call advances the cursor by at least one cell
        assert!(regions.len() <= 24 * 16);
        assert_eq!(regions.is_empty(), grid.n_free_cells() == 0);

        for (i, r) in regions.iter().enumerate() {
            assert!(assertions::region_is_consistent(&grid, r), "{r}");
            for earlier in &regions[..i] {
                assert!(!earlier.contains(r), "{r} is contained in {earlier}");
            }
            // a list holding only `r` never yields a region inside `r`
            if let Some(next) = find_next(&grid, std::slice::from_ref(r)) {
                assert!(!r.contains(&next), "{next} is contained in {r}");
            }
        }
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert!(Container::try_new(0, 5).is_err());
        assert!(Container::try_new(5, 0).is_err());
        assert!(Item::try_new(3, 0, 1).is_err());
        assert!(Rect::try_new(0, 0, 1, 0).is_err());
        assert!(Item::try_new(3, 1, 1).is_ok());
    }

    #[test]
    #[should_panic]
    fn placing_outside_the_container_panics() {
        container_with(4, 4, &[(3, 3, 2, 1)]);
    }
}
