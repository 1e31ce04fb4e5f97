crate::define_id_enum! {
    /// Build tool / package manager identifier
    BuildToolId {
        Pip => "pip",
        Pipenv => "pipenv",
        Poetry => "poetry",
        Pdm => "pdm",
        Hatch => "hatch",
        Uv => "uv",
        Maven => "maven" | "mvn",
        Gradle => "gradle",
        Npm => "npm",
        Pnpm => "pnpm",
        Yarn => "yarn",
        Bun => "bun",
        Go => "go",
        Cargo => "cargo",
        Bundle => "bundle" | "bundler",
        Composer => "composer",
        DotNet => "dotnet",
        Swift => "swift",
        Sbt => "sbt",
    }
}
