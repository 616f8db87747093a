//! Built-in demonstration commands, one per element kind.

use bim_types::ElementKind;

#[derive(Debug, Clone, Copy)]
pub struct DemoCommand {
    pub command: &'static str,
    pub description: &'static str,
    /// Kind the command should route to
    pub expected: ElementKind,
}

pub const DEMO_COMMANDS: &[DemoCommand] = &[
    DemoCommand {
        command: "Crée une poutre de 30x50cm au niveau 2 sur l'axe A",
        description: "Structural beam with section and placement",
        expected: ElementKind::Beam,
    },
    DemoCommand {
        command: "Ajoute une colonne carrée 40cm de 3m de haut au niveau 1",
        description: "Structural column with custom height",
        expected: ElementKind::Column,
    },
    DemoCommand {
        command: "Fais un mur extérieur de 25cm d'épaisseur et 2.8m de haut",
        description: "Wall with thickness and height",
        expected: ElementKind::Wall,
    },
    DemoCommand {
        command: "Crée un toit à 30 degrés au niveau 3",
        description: "Sloped roof with custom angle",
        expected: ElementKind::Roof,
    },
    DemoCommand {
        command: "Dalle de 20cm structurelle au rez-de-chaussée",
        description: "Load-bearing slab on the ground floor",
        expected: ElementKind::Floor,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::detect;

    #[test]
    fn test_demo_commands_route_as_described() {
        for demo in DEMO_COMMANDS {
            assert_eq!(detect(demo.command).0, Some(demo.expected), "{}", demo.command);
            assert!(crate::run(demo.command).success);
        }
    }
}
