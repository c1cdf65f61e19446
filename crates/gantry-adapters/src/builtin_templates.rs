//! Built-in artifact templates.
//!
//! One template per artifact kind, addressed by the template id the
//! generate service passes through the renderer port. Templates are plain
//! text with `{{PLACEHOLDER}}` markers; the renderer decides what each
//! placeholder expands to.
//!
//! The generated artifacts target a C# layered application (the symbol
//! tables gantry consumes describe one), but nothing in the engine depends
//! on that — swapping this module swaps the output language.

/// Template ids, in the order artifacts are usually emitted.
pub const TEMPLATE_IDS: &[&str] = &[
    "configuration",
    "base_command",
    "create_command",
    "update_command",
    "get_response",
    "create_handler",
    "update_handler",
];

/// Look up a built-in template body by id.
pub fn template(template_id: &str) -> Option<&'static str> {
    match template_id {
        "configuration" => Some(CONFIGURATION),
        "base_command" => Some(BASE_COMMAND),
        "create_command" => Some(CREATE_COMMAND),
        "update_command" => Some(UPDATE_COMMAND),
        "get_response" => Some(GET_RESPONSE),
        "create_handler" => Some(CREATE_HANDLER),
        "update_handler" => Some(UPDATE_HANDLER),
        _ => None,
    }
}

const CONFIGURATION: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class {{CLASS_NAME}}Configuration : IEntityTypeConfiguration<{{CLASS_NAME}}>
{
    public void Configure(EntityTypeBuilder<{{CLASS_NAME}}> builder)
    {
{{MAPPINGS}}
    }
}
"#;

const BASE_COMMAND: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public abstract class {{CLASS_NAME}}BaseCommand
{
{{PROPERTIES}}
}
"#;

const CREATE_COMMAND: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class Create{{CLASS_NAME}}Command : {{CLASS_NAME}}BaseCommand
{
{{PROPERTIES}}
}
"#;

const UPDATE_COMMAND: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class Update{{CLASS_NAME}}Command : {{CLASS_NAME}}BaseCommand
{
{{PROPERTIES}}
}
"#;

const GET_RESPONSE: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class {{CLASS_NAME}}Response
{
{{PROPERTIES}}
}
"#;

const CREATE_HANDLER: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class Create{{CLASS_NAME}}CommandHandler : IRequestHandler<Create{{CLASS_NAME}}Command, int>
{
    public Task<int> Handle(Create{{CLASS_NAME}}Command request, CancellationToken cancellationToken)
    {
        throw new NotImplementedException();
    }
}
"#;

const UPDATE_HANDLER: &str = r#"// <auto-generated by gantry/>
{{USINGS}}
namespace {{NAMESPACE}};

public class Update{{CLASS_NAME}}CommandHandler : IRequestHandler<Update{{CLASS_NAME}}Command>
{
    public Task Handle(Update{{CLASS_NAME}}Command request, CancellationToken cancellationToken)
    {
        throw new NotImplementedException();
    }
}
"#;
