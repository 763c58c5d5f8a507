//! `roster` command-line front end.
//!
//! # Responsibility
//! - Translate subcommands into `StudentService` calls.
//! - Print results as tables or JSON; errors propagate to a non-zero exit.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AddArgs, Cli, Command, UpdateArgs};
use roster_core::{
    default_log_level, init_logging, NewStudent, RepoError, ServiceError, SqliteStudentStore,
    StoreConfig, StudentId, StudentRecord, StudentRepository, StudentService,
};

/// Students inserted by `roster seed`.
const SAMPLE_STUDENTS: [(&str, i32, &str, &str, &str); 5] = [
    ("John Doe", 20, "john.doe@university.edu", "Computer Science", "A"),
    ("Jane Smith", 21, "jane.smith@university.edu", "Mathematics", "B+"),
    ("Robert Johnson", 22, "robert.johnson@university.edu", "Physics", "A-"),
    ("Emily Williams", 19, "emily.williams@university.edu", "Chemistry", "B"),
    ("Michael Brown", 20, "michael.brown@university.edu", "Engineering", "C+"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let store = SqliteStudentStore::open(store_config(&cli)?)
        .context("failed to open student database")?;
    let service = StudentService::new(&store);
    run(&service, cli.command)
}

fn store_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = StoreConfig::from_env()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(name) = &cli.database {
        config = config.with_database(name.as_str())?;
    }
    Ok(config)
}

fn run<R: StudentRepository + ?Sized>(
    service: &StudentService<'_, R>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Add(args) => {
            let id = service.add_student(&new_student(args))?;
            println!("added student {id}");
        }
        Command::Get { id } => match service.get_student(StudentId(id))? {
            Some(student) => println!("{}", student.display_text()),
            None => println!("student {id} not found"),
        },
        Command::Update(args) => update(service, args)?,
        Command::Delete { id } => {
            service.delete_student(StudentId(id))?;
            println!("deleted student {id}");
        }
        Command::List { json } => print_students(&service.list_students()?, json)?,
        Command::Search { term, json } => {
            print_students(&service.search_students(&term)?, json)?
        }
        Command::Courses => {
            for course in service.list_courses()? {
                println!("{course}");
            }
        }
        Command::Seed => seed(service)?,
    }
    Ok(())
}

fn new_student(args: AddArgs) -> NewStudent {
    NewStudent {
        name: args.name,
        age: args.age,
        email: args.email,
        course: args.course,
        grade: args.grade,
    }
}

fn update<R: StudentRepository + ?Sized>(
    service: &StudentService<'_, R>,
    args: UpdateArgs,
) -> Result<()> {
    let Some(mut student) = service.get_student(StudentId(args.id))? else {
        println!("student {} not found", args.id);
        return Ok(());
    };

    if let Some(name) = args.name {
        student.name = name;
    }
    if let Some(age) = args.age {
        student.age = age;
    }
    if let Some(email) = args.email {
        student.email = email;
    }
    if let Some(course) = args.course {
        student.course = course;
    }
    if args.clear_grade {
        student.grade = None;
    } else if let Some(grade) = args.grade {
        student.grade = Some(grade);
    }

    service.update_student(&student)?;
    println!("updated student {}", student.id);
    Ok(())
}

fn seed<R: StudentRepository + ?Sized>(
    service: &StudentService<'_, R>,
) -> Result<()> {
    let mut inserted = 0;
    let mut skipped = 0;

    for (name, age, email, course, grade) in SAMPLE_STUDENTS {
        match service.add_student(&NewStudent::new(name, age, email, course, Some(grade))) {
            Ok(_) => inserted += 1,
            Err(ServiceError::Repo(RepoError::ConstraintViolation(_))) => skipped += 1,
            Err(err) => return Err(err.into()),
        }
    }

    println!("seeded {inserted} students ({skipped} already present)");
    Ok(())
}

fn print_students(students: &[StudentRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", render::student_json(students)?);
    } else if students.is_empty() {
        println!("no students");
    } else {
        println!("{}", render::student_table(students));
    }
    Ok(())
}
