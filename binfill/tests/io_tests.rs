#[cfg(test)]
mod tests {
    use std::time::Instant;

    use binfill::entities::Problem;
    use binfill::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};
    use binfill::io::{export, import};

    fn ext_instance(container: (usize, usize), items: &[(u64, usize, usize)]) -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            container: ExtContainer {
                length: container.0,
                width: container.1,
            },
            items: items
                .iter()
                .map(|&(id, length, width)| ExtItem { id, length, width })
                .collect(),
        }
    }

    #[test]
    fn import_keeps_pool_order() {
        let instance = import(&ext_instance((10, 8), &[(7, 2, 3), (3, 4, 4), (5, 1, 1)])).unwrap();

        assert_eq!(instance.base_container.length, 10);
        assert_eq!(instance.base_container.width, 8);
        assert_eq!(
            instance.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![7, 3, 5]
        );
        assert_eq!(instance.item(3).map(|i| (i.length, i.width)), Some((4, 4)));
        assert_eq!(instance.item_area(), 6 + 16 + 1);
    }

    #[test]
    fn import_rejects_invalid_instances() {
        assert!(import(&ext_instance((0, 8), &[(0, 1, 1)])).is_err());
        assert!(import(&ext_instance((10, 8), &[(0, 1, 0)])).is_err());
        assert!(import(&ext_instance((10, 8), &[(0, 1, 1), (0, 2, 2)])).is_err());
    }

    #[test]
    fn instance_json_roundtrip_is_readable() {
        let json = r#"{
            "name": "demo",
            "container": { "length": 800, "width": 600 },
            "items": [ { "id": 0, "length": 200, "width": 400 } ]
        }"#;
        let ext: ExtInstance = serde_json::from_str(json).unwrap();
        let instance = import(&ext).unwrap();
        assert_eq!(instance.total_item_qty(), 1);
    }

    #[test]
    fn export_reports_placements_and_residual_pool() {
        let epoch = Instant::now();
        let instance = import(&ext_instance((10, 10), &[(1, 10, 10), (2, 5, 5)])).unwrap();
        let mut problem = Problem::new(instance);

        problem.place_item(0, 0, 0);
        let solution = problem.save();
        assert_eq!(solution.container_area(), 100);
        assert_eq!(solution.placed_area(), 100);
        assert_eq!(solution.unplaced_area(), 25);

        let ext_solution = export(&solution, epoch);
        assert_eq!(ext_solution.placements.len(), 1);
        assert_eq!(ext_solution.placements[0].item_id, 1);
        assert_eq!((ext_solution.placements[0].x, ext_solution.placements[0].y), (0, 0));
        assert_eq!(
            ext_solution.unplaced,
            vec![ExtItem {
                id: 2,
                length: 5,
                width: 5
            }]
        );
        assert_eq!(ext_solution.density, 1.0);
    }

    #[test]
    fn problem_restores_saved_solution() {
        let instance = import(&ext_instance((4, 4), &[(0, 2, 2), (1, 2, 2), (2, 2, 2)])).unwrap();
        let mut problem = Problem::new(instance);

        problem.place_item(1, 0, 0);
        let saved = problem.save();
        problem.place_item(0, 2, 0);
        assert_eq!(problem.unplaced.len(), 1);

        problem.restore(&saved);
        assert_eq!(problem.container.placements().len(), 1);
        assert_eq!(
            problem.unplaced.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert_eq!(problem.density(), 0.25);
    }
}
