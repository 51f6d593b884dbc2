//! Spring Boot template contents
//!
//! Fixed project files render from a `ProjectContext`, per-class files from a
//! `ClassContext`.

/// Maven build descriptor
pub const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>{{spring_boot_version}}</version>
        <relativePath/>
    </parent>

    <groupId>{{group_id}}</groupId>
    <artifactId>{{artifact_id}}</artifactId>
    <version>0.0.1-SNAPSHOT</version>
    <name>{{project_name}}</name>

    <properties>
        <java.version>{{java_version}}</java.version>
    </properties>

    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-data-jpa</artifactId>
        </dependency>
{{#if is_postgres}}
        <dependency>
            <groupId>org.postgresql</groupId>
            <artifactId>postgresql</artifactId>
            <scope>runtime</scope>
        </dependency>
{{else}}
        <dependency>
            <groupId>com.h2database</groupId>
            <artifactId>h2</artifactId>
            <scope>runtime</scope>
        </dependency>
{{/if}}
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>
    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>
</project>
"#;

/// `application.properties` with placeholder credentials
pub const APPLICATION_PROPERTIES: &str = r"server.port={{server_port}}
spring.application.name={{project_name}}

spring.datasource.url={{datasource_url}}
spring.datasource.username={{datasource_username}}
spring.datasource.password={{datasource_password}}
spring.datasource.driver-class-name={{datasource_driver}}

spring.jpa.hibernate.ddl-auto=update
spring.jpa.open-in-view=false
";

/// Spring Boot entry point
pub const APPLICATION_JAVA: &str = r"package {{base_package}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{application_class}} {

    public static void main(String[] args) {
        SpringApplication.run({{application_class}}.class, args);
    }
}
";

/// Exception mapped to HTTP 404 by Spring
pub const NOT_FOUND_EXCEPTION: &str = r#"package {{base_package}}.exception;

import org.springframework.http.HttpStatus;
import org.springframework.web.bind.annotation.ResponseStatus;

@ResponseStatus(HttpStatus.NOT_FOUND)
public class ResourceNotFoundException extends RuntimeException {

    public ResourceNotFoundException(String resource, Long id) {
        super(resource + " not found: " + id);
    }
}
"#;

/// JPA entity
pub const ENTITY: &str = r#"package {{base_package}}.model;

{{#each imports}}
import {{this}};
{{/each}}
import jakarta.persistence.Entity;
import jakarta.persistence.GeneratedValue;
import jakarta.persistence.GenerationType;
import jakarta.persistence.Id;
{{#if has_relations}}
import jakarta.persistence.ManyToOne;
{{/if}}
import jakarta.persistence.Table;

@Entity
@Table(name = "{{table_name}}")
public class {{class_name}} {

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private Long id;
{{#each fields}}

{{#if is_entity}}
    @ManyToOne
{{/if}}
    private {{java_type}} {{name}};
{{/each}}

    public {{class_name}}() {
    }

    public Long getId() {
        return id;
    }

    public void setId(Long id) {
        this.id = id;
    }
{{#each fields}}

    public {{java_type}} get{{capitalized}}() {
        return {{name}};
    }

    public void set{{capitalized}}({{java_type}} {{name}}) {
        this.{{name}} = {{name}};
    }
{{/each}}
{{#each methods}}

    public {{return_type}} {{name}}({{parameters}}) {
        // TODO: implement {{name}}
    }
{{/each}}
}
"#;

/// Spring Data repository
pub const REPOSITORY: &str = r"package {{base_package}}.repository;

import {{base_package}}.model.{{class_name}};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;

@Repository
public interface {{class_name}}Repository extends JpaRepository<{{class_name}}, Long> {
}
";

/// Service with the fixed five-operation contract
pub const SERVICE: &str = r#"package {{base_package}}.service;

import {{base_package}}.exception.ResourceNotFoundException;
import {{base_package}}.model.{{class_name}};
import {{base_package}}.repository.{{class_name}}Repository;
import org.springframework.stereotype.Service;
import org.springframework.transaction.annotation.Transactional;

import java.util.List;

@Service
@Transactional
public class {{class_name}}Service {

    private final {{class_name}}Repository {{variable}}Repository;

    public {{class_name}}Service({{class_name}}Repository {{variable}}Repository) {
        this.{{variable}}Repository = {{variable}}Repository;
    }

    @Transactional(readOnly = true)
    public List<{{class_name}}> findAll() {
        return {{variable}}Repository.findAll();
    }

    @Transactional(readOnly = true)
    public {{class_name}} findById(Long id) {
        return {{variable}}Repository.findById(id)
                .orElseThrow(() -> new ResourceNotFoundException("{{class_name}}", id));
    }

    public {{class_name}} save({{class_name}} {{variable}}) {
        return {{variable}}Repository.save({{variable}});
    }

    public {{class_name}} update(Long id, {{class_name}} {{variable}}) {
        findById(id);
        {{variable}}.setId(id);
        return {{variable}}Repository.save({{variable}});
    }

    public void deleteById(Long id) {
        findById(id);
        {{variable}}Repository.deleteById(id);
    }
}
"#;

/// REST controller rooted at the class route segment
pub const CONTROLLER: &str = r#"package {{base_package}}.controller;

import {{base_package}}.model.{{class_name}};
import {{base_package}}.service.{{class_name}}Service;
import org.springframework.http.HttpStatus;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.CrossOrigin;
import org.springframework.web.bind.annotation.DeleteMapping;
import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.PathVariable;
import org.springframework.web.bind.annotation.PostMapping;
import org.springframework.web.bind.annotation.PutMapping;
import org.springframework.web.bind.annotation.RequestBody;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;

import java.util.List;

@RestController
@CrossOrigin(origins = "{{frontend_origin}}")
@RequestMapping("/{{route_segment}}")
public class {{class_name}}Controller {

    private final {{class_name}}Service {{variable}}Service;

    public {{class_name}}Controller({{class_name}}Service {{variable}}Service) {
        this.{{variable}}Service = {{variable}}Service;
    }

    @GetMapping
    public ResponseEntity<List<{{class_name}}>> list() {
        return ResponseEntity.ok({{variable}}Service.findAll());
    }

    @GetMapping("/{id}")
    public ResponseEntity<{{class_name}}> get(@PathVariable Long id) {
        return ResponseEntity.ok({{variable}}Service.findById(id));
    }

    @PostMapping
    public ResponseEntity<{{class_name}}> create(@RequestBody {{class_name}} {{variable}}) {
        {{variable}}.setId(null);
        return ResponseEntity.status(HttpStatus.CREATED).body({{variable}}Service.save({{variable}}));
    }

    @PutMapping("/{id}")
    public ResponseEntity<{{class_name}}> update(@PathVariable Long id, @RequestBody {{class_name}} {{variable}}) {
        {{variable}}.setId(id);
        return ResponseEntity.ok({{variable}}Service.update(id, {{variable}}));
    }

    @DeleteMapping("/{id}")
    public ResponseEntity<Void> delete(@PathVariable Long id) {
        {{variable}}Service.deleteById(id);
        return ResponseEntity.noContent().build();
    }
}
"#;
