use altersql_core::{
    Constraint, ConstraintKind, Ident, IndexColumn, IndexOption, IndexType, ReferOption,
    ReferenceDef, RenderError, Result,
};

use crate::to_sql::{write_ident, write_index_column, write_string_literal, write_table_name};

const CONSTRAINT_CONSTRUCT: &str = "constraint";

pub(crate) fn write_constraint(
    out: &mut String,
    dialect_name: &str,
    constraint: &Constraint,
) -> Result<()> {
    let option = constraint.option.as_ref();

    match &constraint.kind {
        ConstraintKind::Key | ConstraintKind::Index => {
            out.push_str("ADD INDEX ");
            write_constraint_name(out, constraint.name.as_ref());
            write_index_type(out, option);
            write_keys(out, "constraint", &constraint.keys)?;
            write_index_option(out, option);
        }
        ConstraintKind::Unique | ConstraintKind::UniqueKey | ConstraintKind::UniqueIndex => {
            out.push_str("ADD CONSTRAINT ");
            write_constraint_name(out, constraint.name.as_ref());
            out.push_str("UNIQUE INDEX ");
            write_index_type(out, option);
            write_keys(out, "constraint", &constraint.keys)?;
            write_index_option(out, option);
        }
        ConstraintKind::ForeignKey(reference) => {
            out.push_str("ADD CONSTRAINT ");
            write_constraint_name(out, constraint.name.as_ref());
            out.push_str("FOREIGN KEY ");
            write_keys(out, "constraint", &constraint.keys)?;
            out.push_str(" REFERENCES ");
            write_reference(out, reference)?;
        }
        ConstraintKind::PrimaryKey => {
            out.push_str("ADD CONSTRAINT ");
            write_constraint_name(out, constraint.name.as_ref());
            out.push_str("PRIMARY KEY ");
            write_index_type(out, option);
            write_keys(out, "constraint", &constraint.keys)?;
            write_index_option(out, option);
        }
        ConstraintKind::Fulltext => {
            out.push_str("ADD FULLTEXT INDEX ");
            write_constraint_name(out, constraint.name.as_ref());
            write_keys(out, "constraint", &constraint.keys)?;
            write_index_option(out, option);
        }
        ConstraintKind::Check(_) => {
            return Err(RenderError::unsupported(
                CONSTRAINT_CONSTRUCT,
                constraint.kind.variant_name(),
                dialect_name,
            )
            .into());
        }
    }

    Ok(())
}

fn write_constraint_name(out: &mut String, name: Option<&Ident>) {
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        write_ident(out, name);
        out.push(' ');
    }
}

/// Writes `(a, b, ...)`. A key list is never empty in a well-formed tree.
fn write_keys(out: &mut String, node: &'static str, keys: &[IndexColumn]) -> Result<()> {
    if keys.is_empty() {
        return Err(RenderError::invariant(node, "key column list is empty").into());
    }

    out.push('(');
    for (index, key) in keys.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write_index_column(out, key);
    }
    out.push(')');

    Ok(())
}

fn write_reference(out: &mut String, reference: &ReferenceDef) -> Result<()> {
    write_table_name(out, &reference.table);
    out.push(' ');
    write_keys(out, "reference definition", &reference.columns)?;

    if let Some(action) = reference.on_delete.and_then(refer_option_sql) {
        out.push_str(" ON DELETE ");
        out.push_str(action);
    }
    if let Some(action) = reference.on_update.and_then(refer_option_sql) {
        out.push_str(" ON UPDATE ");
        out.push_str(action);
    }

    Ok(())
}

fn refer_option_sql(option: ReferOption) -> Option<&'static str> {
    match option {
        ReferOption::NoOption => None,
        ReferOption::Restrict => Some("RESTRICT"),
        ReferOption::Cascade => Some("CASCADE"),
        ReferOption::SetNull => Some("SET NULL"),
        ReferOption::NoAction => Some("NO ACTION"),
        ReferOption::SetDefault => Some("SET DEFAULT"),
    }
}

fn write_index_type(out: &mut String, option: Option<&IndexOption>) {
    match option.and_then(|option| option.tp) {
        Some(IndexType::Btree) => out.push_str("USING BTREE "),
        Some(IndexType::Hash) => out.push_str("USING HASH "),
        None => {}
    }
}

// Only the comment is carried over from the index option.
fn write_index_option(out: &mut String, option: Option<&IndexOption>) {
    let comment = option
        .and_then(|option| option.comment.as_deref())
        .filter(|comment| !comment.is_empty());
    if let Some(comment) = comment {
        out.push_str(" COMMENT ");
        write_string_literal(out, comment);
    }
}
