crate::define_id_enum! {
    /// Language identifier; `Custom` carries names reported by an external classifier
    /// that have no registry profile.
    LanguageId {
        Python => "python",
        Kotlin => "kotlin",
        Java => "java",
        Node => "node" | "nodejs" | "node.js",
        JavaScript => "javascript" | "js",
        TypeScript => "typescript" | "ts",
        Go => "go" | "golang",
        Rust => "rust",
        Ruby => "ruby",
        Php => "php",
        DotNet => "dotnet" | ".net",
        CSharp => "csharp" | "c#",
        Swift => "swift",
        Scala => "scala",
    }
}
